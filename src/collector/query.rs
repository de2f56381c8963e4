use rusqlite::{Connection, OpenFlags, params};
use std::path::Path;

use crate::model::value::{CellValue, PluginRow};

/// Prefix match on the plugin name; the prefix is always bound, never spliced.
pub const PLUGIN_QUERY: &str = "SELECT * FROM plugins WHERE name LIKE ?1 || '%'";

pub fn open(path: &Path) -> Result<Connection, rusqlite::Error> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

pub fn query_plugin_rows(
    db_path: &Path,
    name_prefix: &str,
) -> Result<Vec<PluginRow>, rusqlite::Error> {
    let conn = open(db_path)?;
    let mut stmt = conn.prepare(PLUGIN_QUERY)?;
    let column_count = stmt.column_count();

    let rows = stmt
        .query_map(params![name_prefix], |row| {
            (0..column_count)
                .map(|idx| row.get_ref(idx).map(CellValue::from))
                .collect::<Result<Vec<_>, _>>()
                .map(PluginRow)
        })?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "{}: {} rows matching {name_prefix:?}",
        db_path.display(),
        rows.len()
    );

    Ok(rows)
}
