use crate::model::value::PluginRow;

pub const REPORT_WIDTH: usize = 80;

/// Columns each nesting level is indented by.
const INDENT: usize = 2;

/// Something that can be laid out inside a pretty-printed list.
pub trait Pretty {
    /// Single-line form.
    fn flat(&self) -> String;

    /// Multi-line form with continuation lines starting at `column`, or
    /// `None` when the value cannot be broken.
    fn broken(&self, _column: usize) -> Option<String> {
        None
    }
}

impl Pretty for String {
    fn flat(&self) -> String {
        self.clone()
    }
}

impl Pretty for PluginRow {
    fn flat(&self) -> String {
        self.to_string()
    }

    fn broken(&self, column: usize) -> Option<String> {
        if self.cells().len() < 2 {
            return None;
        }

        let cells: Vec<String> = self.cells().iter().map(ToString::to_string).collect();
        let separator = format!(",\n{}", " ".repeat(column + INDENT));
        Some(format!("( {})", cells.join(&separator)))
    }
}

/// Format a list on one line when it fits in `width`, else one item per line.
/// Items that still overflow are broken in turn.
///
/// ```text
/// ['a', 'b']
/// [ 'a',
///   ( 1,
///     'b')]
/// ```
pub fn pretty_list<T: Pretty>(items: &[T], width: usize) -> String {
    let flat: Vec<String> = items.iter().map(Pretty::flat).collect();

    let one_line = format!("[{}]", flat.join(", "));
    if one_line.chars().count() <= width {
        return one_line;
    }

    let lines: Vec<String> = items
        .iter()
        .zip(flat)
        .map(|(item, flat)| {
            // trailing "," or "]" takes one more column
            if INDENT + flat.chars().count() < width {
                return flat;
            }
            item.broken(INDENT).unwrap_or(flat)
        })
        .collect();

    format!("[ {}]", lines.join(",\n  "))
}
