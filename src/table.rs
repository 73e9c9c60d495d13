//! Pipe-row helpers shared by both renderers.
//!
//! A row that starts and ends with `|` is table syntax; consecutive table
//! rows form one table. Any other row may still use `|` to place several
//! widgets side by side, in which case quoted spans protect their pipes.

use std::sync::LazyLock;

use regex::Regex;

static SEP_CELL_RE: LazyLock<Regex> =
    lazy_regex!(r"^:?-{3,}:?$", "separator cell regex should compile");

/// Whether `text` is a pipe-delimited table row.
#[must_use]
pub fn is_table_row(text: &str) -> bool {
    let t = text.trim();
    t.starts_with('|') && t.ends_with('|')
}

/// Split a table row into trimmed cells.
///
/// The outer pipes are stripped and the interior is split on every `|`;
/// table cells cannot contain a literal pipe.
///
/// ```
/// use wiretext::table::split_table_cells;
///
/// assert_eq!(split_table_cells("| a | b |"), vec!["a", "b"]);
/// ```
#[must_use]
pub fn split_table_cells(line: &str) -> Vec<String> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }
    s.split('|').map(|c| c.trim().to_string()).collect()
}

/// Split a non-table row into widget cells on unquoted pipes.
///
/// A `|` inside a double-quoted span is kept as text. Cells are trimmed and
/// empty cells are dropped.
///
/// ```
/// use wiretext::table::split_pipes;
///
/// assert_eq!(split_pipes(r#"!"a|b" | !c"#), vec![r#"!"a|b""#, "!c"]);
/// ```
#[must_use]
pub fn split_pipes(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    for ch in line.chars() {
        if ch == '"' {
            in_quote = !in_quote;
        }
        if ch == '|' && !in_quote {
            cells.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    cells.push(current.trim().to_string());
    cells.retain(|c| !c.is_empty());
    cells
}

/// Whether every cell is a dash run such as `---`, `:---` or `:---:`.
#[must_use]
pub fn is_separator_row(cells: &[String]) -> bool {
    cells.iter().all(|c| SEP_CELL_RE.is_match(c))
}
