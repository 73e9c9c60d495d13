//! Side-by-side column layout for groups.

use tracing::trace;

use super::{COLUMN_FLOOR, COLUMN_GAP};
use crate::{
    ast::{Node, Ratio},
    wrap::pad_to_width,
};

/// Share `total` columns among `children`.
///
/// Ratioed sections get their proportional share of `total`, every other
/// child an even share; no column starts below [`COLUMN_FLOOR`]. The widths
/// plus the gaps are then nudged one column at a time towards `total`.
/// Growing always converges; shrinking stops as soon as it meets a column
/// already at the floor, leaving the layout wider than requested.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "layout widths are small non-negative integers"
)]
pub(crate) fn column_widths(children: &[Node], total: usize) -> Vec<usize> {
    let count = children.len().max(1);
    let ratios: Vec<Option<f64>> = children
        .iter()
        .map(|c| c.ratio().map(Ratio::value))
        .collect();
    let ratio_sum: f64 = ratios.iter().flatten().sum();
    let even = (total / count).max(COLUMN_FLOOR);

    let mut widths: Vec<usize> = ratios
        .iter()
        .map(|ratio| match ratio {
            Some(r) if ratio_sum > 0.0 => {
                ((total as f64 * (r / ratio_sum)).floor() as usize).max(COLUMN_FLOOR)
            }
            _ => even,
        })
        .collect();
    if widths.is_empty() {
        return widths;
    }

    let len = widths.len();
    let mut used = widths.iter().sum::<usize>() + COLUMN_GAP * (len - 1);
    while used < total {
        let i = (total - used) % len;
        widths[i] += 1;
        used += 1;
    }
    while used > total {
        let i = (used - total) % len;
        if widths[i] <= COLUMN_FLOOR {
            break;
        }
        widths[i] -= 1;
        used -= 1;
    }

    trace!(?widths, total, used, "column widths");
    widths
}

/// Lay rendered blocks side by side.
///
/// Each block is cut or padded to its column width and to the height of the
/// tallest block; joined rows lose their trailing spaces.
pub(crate) fn join_columns(blocks: &[Vec<String>], widths: &[usize]) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let gap = " ".repeat(COLUMN_GAP);
    (0..height)
        .map(|row| {
            let cells: Vec<String> = blocks
                .iter()
                .zip(widths)
                .map(|(block, &width)| {
                    pad_to_width(block.get(row).map_or("", String::as_str), width)
                })
                .collect();
            cells.join(&gap).trim_end().to_string()
        })
        .collect()
}
