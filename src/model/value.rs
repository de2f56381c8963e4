use rusqlite::types::ValueRef;
use std::fmt;

/// A single cell from a `plugins` row.
///
/// The table belongs to Ableton, so cells keep SQLite's storage class
/// instead of being mapped onto a fixed struct.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<ValueRef<'_>> for CellValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => CellValue::Null,
            ValueRef::Integer(i) => CellValue::Integer(i),
            ValueRef::Real(f) => CellValue::Real(f),
            ValueRef::Text(bytes) => CellValue::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => CellValue::Blob(bytes.to_vec()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("NULL"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Real(r) => write!(f, "{r:?}"),
            CellValue::Text(s) => f.write_str(&quote(s)),
            CellValue::Blob(bytes) => {
                f.write_str("x'")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                f.write_str("'")
            }
        }
    }
}

/// One matching row, cells in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginRow(pub Vec<CellValue>);

impl PluginRow {
    pub fn cells(&self) -> &[CellValue] {
        &self.0
    }
}

impl fmt::Display for PluginRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cell}")?;
        }
        // single-element tuples keep the trailing comma
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

/// Single-quote a string, escaping backslashes, quotes and control characters.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_as_literals() {
        let row = PluginRow(vec![
            CellValue::Integer(7),
            CellValue::Text("KClip 3".into()),
            CellValue::Null,
            CellValue::Real(2.0),
            CellValue::Blob(vec![0x00, 0xff]),
        ]);

        assert_eq!(row.to_string(), "(7, 'KClip 3', NULL, 2.0, x'00ff')");
    }

    #[test]
    fn single_cell_row_keeps_trailing_comma() {
        let row = PluginRow(vec![CellValue::Text("KClip".into())]);
        assert_eq!(row.to_string(), "('KClip',)");
    }

    #[test]
    fn quote_escapes_specials() {
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\\b\nc"), "'a\\\\b\\nc'");
    }

    #[test]
    fn text_cells_decode_lossily() {
        let cell = CellValue::from(ValueRef::Text(&[b'K', 0xff]));
        assert_eq!(cell, CellValue::Text("K\u{fffd}".into()));
    }
}
