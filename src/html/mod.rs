//! HTML document renderer.
//!
//! The tree maps onto nested flex containers: the root is a `div.root`,
//! groups are `div.group` rows and sections become semantic tags where their
//! name allows it. Rows are split into widget cells, and runs of adjacent
//! table-syntax rows are merged into a single `<table>`.

use std::fmt::Write as _;

use tracing::instrument;

use crate::{
    ast::{Node, Ratio},
    table::{is_separator_row, is_table_row, split_pipes, split_table_cells},
};

mod inline;
mod segment;
mod style;

pub use inline::escape_html;
use inline::inline_text_html;
use segment::segment_html;
use style::STYLESHEET;

const SEMANTIC_TAGS: &[&str] = &[
    "header", "footer", "nav", "main", "section", "aside", "article",
];

/// Tag for a section: its name when that is a semantic element, else
/// `section`.
fn semantic_tag(name: &str) -> &'static str {
    SEMANTIC_TAGS
        .iter()
        .find(|tag| tag.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or("section")
}

fn is_table_node(node: &Node) -> bool {
    matches!(node, Node::Row { text } if is_table_row(text))
}

fn row_html(text: &str) -> String {
    let t = text.trim();
    if t.contains('|') && !is_table_row(t) {
        let mut out = String::from(r#"<div class="wt-row">"#);
        for cell in split_pipes(t) {
            let _ = write!(out, r#"<div class="wt-cell">{}</div>"#, segment_html(&cell));
        }
        out.push_str("</div>");
        return out;
    }
    format!(
        r#"<div class="wt-row"><div class="wt-cell wt-grow">{}</div></div>"#,
        segment_html(t)
    )
}

/// Merge a run of table rows into one table.
///
/// The first row is the header. A second row made only of dash runs is the
/// header separator and is dropped; every other row is a body row.
fn table_html(rows: &[&str]) -> String {
    let parsed: Vec<Vec<String>> = rows.iter().map(|r| split_table_cells(r)).collect();
    let Some((header, rest)) = parsed.split_first() else {
        return String::new();
    };
    let body = match rest.split_first() {
        Some((first, after)) if is_separator_row(first) => after,
        _ => rest,
    };

    let mut out = String::from(r#"<table class="wt-table"><thead><tr>"#);
    for cell in header {
        let _ = write!(out, "<th>{}</th>", inline_text_html(cell));
    }
    out.push_str("</tr></thead><tbody>");
    for row in body {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", inline_text_html(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn children_html(children: &[Node]) -> String {
    children
        .chunk_by(|a, b| is_table_node(a) && is_table_node(b))
        .map(|run| match run {
            [Node::Row { text }, ..] if is_table_row(text) => {
                let rows: Vec<&str> = run
                    .iter()
                    .filter_map(|node| match node {
                        Node::Row { text } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect();
                table_html(&rows)
            }
            _ => run.iter().map(node_html).collect(),
        })
        .collect()
}

fn section_html(name: &str, ratio: Option<Ratio>, children: &[Node]) -> String {
    let tag = semantic_tag(name);
    let (class, style) = match ratio {
        Some(Ratio { n, .. }) => ("section frame", format!(r#" style="flex:{n} 1 0%""#)),
        None => ("section", String::new()),
    };
    format!(
        r#"<{tag} class="{class}"{style} data-wt="{}">{}</{tag}>"#,
        escape_html(name),
        children_html(children)
    )
}

fn node_html(node: &Node) -> String {
    match node {
        Node::Root { children } => {
            format!(r#"<div class="root">{}</div>"#, children_html(children))
        }
        Node::Group { children } => {
            format!(r#"<div class="group">{}</div>"#, children_html(children))
        }
        Node::Section {
            name,
            ratio,
            children,
        } => section_html(name, *ratio, children),
        Node::Row { text } => row_html(text),
    }
}

/// Render a tree as a complete, self-contained HTML document.
///
/// # Examples
///
/// ```
/// use wiretext::{parse, render_html_document};
///
/// let html = render_html_document(&parse("=main\n  # Hi").unwrap());
/// assert!(html.starts_with("<!doctype html>"));
/// assert!(html.contains("<main class=\"section\" data-wt=\"main\">"));
/// assert!(html.contains("<h1>Hi</h1>"));
/// ```
#[must_use]
#[instrument(level = "debug", skip_all)]
pub fn render_html_document(tree: &Node) -> String {
    format!(
        r#"<!doctype html><html><head><meta charset="utf-8" />{STYLESHEET}</head><body>{}</body></html>"#,
        node_html(tree)
    )
}
