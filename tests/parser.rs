//! Integration tests for turning WireText source into a tree.

use wiretext::{
    MAX_DEPTH, Node, Ratio, SyntaxError, parse, render_ascii, render_html_document,
};

#[macro_use]
mod prelude;
use prelude::*;

fn kinds(nodes: &[Node]) -> Vec<&'static str> {
    nodes.iter().map(Node::kind).collect()
}

fn section_names(nodes: &[Node]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(|n| match n {
            Node::Section { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

#[rstest]
fn codex_layout_shape(codex_layout: &str) {
    let tree = parse(codex_layout).expect("sample parses");
    let root = tree.children();
    assert_eq!(kinds(root), vec!["group"]);

    let columns = root[0].children();
    assert_eq!(section_names(columns), vec!["aside", "section"]);
    assert_eq!(columns[0].ratio(), Some(Ratio { n: 1, d: 6 }));
    assert_eq!(columns[1].ratio(), Some(Ratio { n: 5, d: 6 }));
    assert_eq!(columns[0].children().len(), 15);

    let inner = columns[1].children();
    assert_eq!(kinds(inner), vec!["group"]);
    assert_eq!(section_names(inner[0].children()), vec!["threads", "chat"]);

    let chat = &inner[0].children()[1];
    assert_eq!(
        section_names(chat.children()),
        vec!["chat_header", "messages", "composer"]
    );
}

#[rstest]
fn simple_form_rows_are_verbatim(simple_form: &str) {
    let tree = parse(simple_form).expect("sample parses");
    let main = &tree.children()[0];
    let texts: Vec<&str> = main
        .children()
        .iter()
        .filter_map(|n| match n {
            Node::Row { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            "# Create Account",
            "^first_name | ^last_name",
            "^email",
            "^password",
            "[] \"I agree to terms\"",
            "!Cancel | !!\"Create account\"",
        ]
    );
}

#[rstest]
#[case("]", 1)]
#[case("=a\n  x\n  ]", 3)]
#[case("[\n=a\n]\n\n]", 5)]
#[case("=a\n  [\n  ]\n  ]", 4)]
fn unmatched_close_reports_its_line(#[case] source: &str, #[case] line: usize) {
    assert_eq!(parse(source), Err(SyntaxError::UnmatchedClose { line }));
}

#[test]
fn indented_close_still_closes_group() {
    let tree = parse("=outer\n  [\n    =col\n      x\n      ]\n  after").unwrap();
    let outer = &tree.children()[0];
    assert_eq!(kinds(outer.children()), vec!["group", "row"]);
}

#[test]
fn sibling_rows_after_nested_section_return_to_parent() {
    let tree = parse("=a\n  =b\n    inner\n  outer").unwrap();
    let a = &tree.children()[0];
    assert_eq!(kinds(a.children()), vec!["section", "row"]);
}

#[test]
fn malformed_header_becomes_plain_name() {
    let tree = parse("=left col 1/2").unwrap();
    assert_eq!(
        tree.children()[0],
        Node::Section {
            name: "left col 1/2".into(),
            ratio: None,
            children: vec![],
        }
    );
}

#[test]
fn zero_numerator_is_not_a_ratio() {
    let tree = parse("=a 0/3\n  x").unwrap();
    let section = &tree.children()[0];
    assert_eq!(section.ratio(), None);
    assert!(matches!(section, Node::Section { name, .. } if name == "a 0/3"));
}

#[test]
fn deepest_bracket_chain_parses_and_renders() {
    let source = format!("{}x", "[\n".repeat(MAX_DEPTH));
    let tree = parse(&source).unwrap();
    assert_eq!(render_ascii(&tree, 80), lines_vec!["x"]);
    let html = render_html_document(&tree);
    assert_eq!(elements(&html, "div").len(), MAX_DEPTH + 3);
}

#[test]
fn bracket_chain_past_the_limit_is_rejected() {
    let source = format!("{}x", "[\n".repeat(100_000));
    assert_eq!(
        parse(&source),
        Err(SyntaxError::TooDeep {
            line: MAX_DEPTH + 1,
            limit: MAX_DEPTH,
        })
    );
}

#[test]
fn rows_keep_markup_unparsed() {
    let tree = parse("  | a | b |  ").unwrap();
    assert_eq!(
        tree.children(),
        &[Node::Row {
            text: "| a | b |".into()
        }]
    );
}

#[test]
fn parse_is_deterministic() {
    let src = "[\n=a 1/2\n  x\n=b 1/2\n  y\n]";
    assert_eq!(parse(src), parse(src));
}
