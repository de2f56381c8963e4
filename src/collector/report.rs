use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::CollectError;
use super::pretty::{REPORT_WIDTH, pretty_list};
use crate::model::value::{PluginRow, quote};

/// Outcome of scanning one database.
#[derive(Debug)]
pub struct DatabaseScan {
    pub path: PathBuf,
    pub result: Result<Vec<PluginRow>, CollectError>,
}

impl DatabaseScan {
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}

/// Write the report, replacing whatever a previous run left at `path`.
pub fn write_report(
    path: &Path,
    databases: &[PathBuf],
    results: &[DatabaseScan],
) -> Result<(), CollectError> {
    let report_err = |source| CollectError::Report {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(report_err)?;
    let mut out = BufWriter::new(file);
    render_report(&mut out, databases, results).map_err(report_err)?;
    out.flush().map_err(report_err)?;

    tracing::info!("wrote report to {}", path.display());
    Ok(())
}

pub fn render_report<W: Write>(
    out: &mut W,
    databases: &[PathBuf],
    results: &[DatabaseScan],
) -> io::Result<()> {
    let quoted: Vec<String> = databases
        .iter()
        .map(|db| quote(&db.to_string_lossy()))
        .collect();

    writeln!(out, "found dbs:")?;
    writeln!(out, "{}", pretty_list(&quoted, REPORT_WIDTH))?;
    writeln!(out)?;

    for scan in results {
        writeln!(out, "on db: {}", scan.path.display())?;
        match &scan.result {
            Ok(rows) => {
                writeln!(out, "rows:")?;
                writeln!(out, "{}", pretty_list(rows, REPORT_WIDTH))?;
            }
            Err(err) => writeln!(out, "error: {err}")?,
        }
        writeln!(out)?;
    }

    Ok(())
}
