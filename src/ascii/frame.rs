//! Box-drawing borders around sections.

use super::COLUMN_FLOOR;
use crate::{
    ast::Node,
    wrap::{pad_to_width, truncate_to_width, wrap},
};

/// Whether a section gets a border.
///
/// Only ratioed sections are framed, and not when the section merely wraps a
/// group of ratioed sections: those columns carry their own borders.
pub(crate) fn should_frame(node: &Node) -> bool {
    let Node::Section {
        ratio: Some(_),
        children,
        ..
    } = node
    else {
        return false;
    };
    let passthrough = match children.as_slice() {
        [Node::Group { children: columns }] => {
            !columns.is_empty() && columns.iter().all(Node::is_ratioed_section)
        }
        _ => false,
    };
    !passthrough
}

/// Enclose `inner` in a `+---+` / `|...|` border exactly `width` wide.
///
/// Lines that already start with a border character belong to a nested
/// frame and are cut to fit; everything else is re-wrapped to the interior
/// width.
pub(crate) fn frame(inner: &[String], width: usize) -> Vec<String> {
    let interior = width.max(COLUMN_FLOOR) - 2;
    let border = format!("+{}+", "-".repeat(interior));

    let mut out = Vec::with_capacity(inner.len() + 2);
    out.push(border.clone());
    for line in inner {
        let parts = if line.starts_with('+') || line.starts_with('|') {
            vec![truncate_to_width(line, interior).to_string()]
        } else {
            wrap(line, interior)
        };
        out.extend(
            parts
                .iter()
                .map(|part| format!("|{}|", pad_to_width(part, interior))),
        );
    }
    out.push(border);
    out
}
