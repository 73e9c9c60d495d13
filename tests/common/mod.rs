//! Utility helpers shared across integration tests.
#![allow(dead_code, unused_macros, reason = "each test crate uses a different subset")]

use html5ever::{driver::ParseOpts, parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use rstest::fixture;

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// A two-column application shell with nested ratioed columns.
#[fixture]
pub fn codex_layout() -> &'static str {
    r#"[
=aside 1/6
  i:new "New thread"
  i:clock "Automations"
  i:box "Skills"
  ---
  # Threads
  i:folder misc
  _Read wiretext skill documentation_ `(6m)`
  _Activate wiretext skill_ `(7m)`
  _Inspect new wiretext skill_ `(8m)`
  i:folder lit
  "No threads"
  i:folder howcaniprayforyou
  "No threads"
  ---
  i:settings _Settings_

=section 5/6
  [
  =threads 1/4
    =threads_header
      # Open | i:filter
    =threads_list
      _Read wiretext skill documentation_ `(misc)`
      _Activate wiretext skill_ `(misc)`
      _Inspect new wiretext skill_ `(misc)`

  =chat 3/4
    =chat_header
      # "Read wiretext skill documentation" | misc | "Model: GPT-5 Codex" | `(Default mode)` | _Open in repo_
    =messages
      "now generate HTML from it and open it up in chrome"
      "I'll create a standalone HTML mock for that WireText sketch in /Users/jef/misc, then open it in Chrome."
      "Created and opened the mock in Chrome."
    =composer
      ^^ "Ask for follow-up changes"
      [] "Use plan mode" | [] "Run tools automatically"
      !Attach | !!Send
  ]
]"#
}

/// A single-column sign-up form.
#[fixture]
pub fn simple_form() -> &'static str {
    r#"=main
  # Create Account
  ^first_name | ^last_name
  ^email
  ^password
  [] "I agree to terms"
  !Cancel | !!"Create account""#
}

/// A heading followed by a four-row table.
#[fixture]
pub fn contacts_table() -> &'static str {
    "=main
  # Contacts
  | Name | Email | Status |
  |------|-------|--------|
  | Jane | jane@example.com | `(Active)` |
  | Bob | bob@example.com | `(Pending)` |"
}

fn collect_elements(handle: &Handle, tag: &str, found: &mut Vec<Handle>) {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref() == tag {
            found.push(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        collect_elements(child, tag, found);
    }
}

/// Parse an HTML document and return every element named `tag`.
pub fn elements(html: &str, tag: &str) -> Vec<Handle> {
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let mut found = Vec::new();
    collect_elements(&dom.document, tag, &mut found);
    // `RcDom`'s node `Drop` empties descendants' `children`, even for handles
    // still held by the caller, so keep the test DOM alive.
    std::mem::forget(dom);
    found
}

/// Count elements named `tag` beneath `handle`.
pub fn count_within(handle: &Handle, tag: &str) -> usize {
    let mut found = Vec::new();
    collect_elements(handle, tag, &mut found);
    found.len()
}

/// Concatenated text content of `handle`.
pub fn text_of(handle: &Handle) -> String {
    let mut out = String::new();
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        _ => {
            for child in handle.children.borrow().iter() {
                out.push_str(&text_of(child));
            }
        }
    }
    out
}

/// Value of attribute `attr` on an element, if present.
pub fn attr(handle: &Handle, attr: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &handle.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|a| a.name.local.as_ref() == attr)
        .map(|a| a.value.to_string())
}
