//! Fixed-width ASCII layout renderer.
//!
//! Sections stack their children vertically with one blank line between
//! them, groups lay their children out as columns, and ratioed sections are
//! framed with `+`, `-` and `|` borders. Rows are normalized with
//! [`normalize_row`] and word-wrapped to their column.

use tracing::instrument;

use crate::{ast::Node, normalize::normalize_row, wrap::wrap};

mod columns;
mod frame;

use columns::{column_widths, join_columns};
use frame::{frame, should_frame};

/// Narrowest column the layout ever produces.
pub const COLUMN_FLOOR: usize = 18;

/// Spaces between adjacent columns.
pub const COLUMN_GAP: usize = 3;

const EMPTY_SECTION: &str = "(empty)";

/// Drop leading and trailing whitespace-only lines.
fn trim_blank(mut lines: Vec<String>) -> Vec<String> {
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);
    lines.truncate(end);
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    lines.drain(..start);
    lines
}

fn render_group(children: &[Node], width: usize) -> Vec<String> {
    match children {
        [] => vec![String::new()],
        [only] => trim_blank(render_node(only, width)),
        _ => {
            let widths = column_widths(children, width);
            let blocks: Vec<Vec<String>> = children
                .iter()
                .zip(&widths)
                .map(|(child, &w)| {
                    let lines = trim_blank(render_node(child, w));
                    if lines.is_empty() {
                        vec![String::new()]
                    } else {
                        lines
                    }
                })
                .collect();
            join_columns(&blocks, &widths)
        }
    }
}

fn render_section(node: &Node, children: &[Node], width: usize) -> Vec<String> {
    let framed = should_frame(node);
    let inner_width = if framed {
        width.saturating_sub(2).max(COLUMN_FLOOR)
    } else {
        width.max(COLUMN_FLOOR)
    };

    let mut inner = Vec::new();
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            inner.push(String::new());
        }
        inner.extend(render_node(child, inner_width));
    }
    let mut inner = trim_blank(inner);
    if inner.is_empty() {
        inner.push(EMPTY_SECTION.to_string());
    }

    if framed { frame(&inner, width) } else { inner }
}

fn render_node(node: &Node, width: usize) -> Vec<String> {
    match node {
        Node::Root { children } => trim_blank(
            children
                .iter()
                .flat_map(|child| render_node(child, width))
                .collect(),
        ),
        Node::Group { children } => render_group(children, width),
        Node::Section { children, .. } => render_section(node, children, width),
        Node::Row { text } => wrap(&normalize_row(text), width.max(COLUMN_FLOOR)),
    }
}

/// Render a tree as fixed-width text lines.
///
/// Callers should clamp `width` to a sensible minimum first (see
/// [`RenderOptions`](crate::RenderOptions)); the renderer itself only
/// guarantees that no column drops below [`COLUMN_FLOOR`].
///
/// # Examples
///
/// ```
/// use wiretext::{parse, render_ascii};
///
/// let tree = parse("=main\n  ^email").unwrap();
/// assert_eq!(render_ascii(&tree, 60), vec!["[email]"]);
/// ```
#[must_use]
#[instrument(level = "debug", skip(tree))]
pub fn render_ascii(tree: &Node, width: usize) -> Vec<String> {
    render_node(tree, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, string_vec};

    fn render(src: &str, width: usize) -> Vec<String> {
        render_ascii(&parse(src).expect("valid source"), width)
    }

    #[test]
    fn trims_blank_edges_only() {
        let lines = string_vec!["", "  ", "a", "", "b", " "];
        assert_eq!(trim_blank(lines), string_vec!["a", "", "b"]);
        assert!(trim_blank(string_vec!["", " "]).is_empty());
    }

    #[test]
    fn unratioed_section_stacks_rows() {
        let out = render("=main\n  # Title\n  ^email\n  !!\"Go\"", 80);
        assert_eq!(out, string_vec!["Title", "", "[email]", "", "[! Go]"]);
    }

    #[test]
    fn empty_section_placeholder() {
        assert_eq!(render("=nothing", 60), string_vec!["(empty)"]);
    }

    #[test]
    fn ratioed_section_is_framed() {
        let out = render("=card 1/1\n  hi", 20);
        assert_eq!(
            out,
            string_vec![
                "+------------------+",
                "|hi                |",
                "+------------------+",
            ]
        );
    }

    #[test]
    fn empty_group_renders_nothing_visible() {
        assert!(render("[\n]", 60).is_empty());
        assert_eq!(render_group(&[], 60), string_vec![""]);
    }

    #[test]
    fn two_halves_fill_120_columns() {
        let src = "[\n=left 1/2\n  L\n=right 1/2\n  R\n]";
        let out = render(src, 120);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].len(), 120);
        assert!(out[0].starts_with(&format!("+{}+   +", "-".repeat(57))));
        assert!(out[1].starts_with(&format!("|L{}|   |R", " ".repeat(56))));
    }

    #[test]
    fn rows_wrap_to_the_floor_in_narrow_columns() {
        let out = render_node(
            &Node::Row {
                text: "one two three four five six".into(),
            },
            5,
        );
        assert_eq!(out, string_vec!["one two three four", "five six"]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let src = "=a 1/3\n  x | y\n=b 2/3\n  | h |\n  | --- |\n  | v |";
        assert_eq!(render(src, 90), render(src, 90));
    }
}
