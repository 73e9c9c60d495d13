//! WireText source parser.
//!
//! Structure comes from two mechanisms: two-space indentation and explicit
//! `[` / `]` group delimiters. Nodes under construction live in a flat arena
//! and are referred to by index; the open-node stack holds `(index, indent)`
//! pairs. A node is attached to its parent when it is popped, so children
//! keep source order. Once the input is exhausted the arena is folded into
//! an owned [`Node`] tree.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::{
    ast::{Node, Ratio},
    error::SyntaxError,
};

static SECTION_RE: LazyLock<Regex> = lazy_regex!(
    r"^(\S+)(?:\s+(\d+)/(\d+))?$",
    "section header regex should compile",
);

const SECTION_MARKER: char = '=';
const OPEN_GROUP: &str = "[";
const CLOSE_GROUP: &str = "]";

type NodeId = usize;

const ROOT: NodeId = 0;

/// Deepest nesting of sections and groups below the root.
///
/// Renderers recurse once per level, so the parser refuses anything deeper.
/// At this depth a JSON dump still reloads within `serde_json`'s default
/// recursion limit.
pub const MAX_DEPTH: usize = 48;

#[derive(Debug)]
enum DraftKind {
    Root,
    Section { name: String, ratio: Option<Ratio> },
    Group,
    Row { text: String },
}

#[derive(Debug)]
struct Draft {
    kind: DraftKind,
    children: Vec<NodeId>,
}

/// Nodes under construction, addressed by index.
#[derive(Debug)]
struct Arena {
    drafts: Vec<Draft>,
}

impl Arena {
    fn new() -> Self {
        Self {
            drafts: vec![Draft {
                kind: DraftKind::Root,
                children: Vec::new(),
            }],
        }
    }

    fn alloc(&mut self, kind: DraftKind) -> NodeId {
        self.drafts.push(Draft {
            kind,
            children: Vec::new(),
        });
        self.drafts.len() - 1
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.drafts[parent].children.push(child);
    }

    fn is_group(&self, id: NodeId) -> bool {
        matches!(self.drafts[id].kind, DraftKind::Group)
    }

    fn accepts_children(&self, id: NodeId) -> bool {
        !matches!(self.drafts[id].kind, DraftKind::Row { .. })
    }

    fn take_frame(&mut self, id: NodeId) -> Frame {
        let kind = std::mem::replace(&mut self.drafts[id].kind, DraftKind::Group);
        let pending = std::mem::take(&mut self.drafts[id].children);
        Frame {
            kind,
            children: Vec::with_capacity(pending.len()),
            pending: pending.into_iter(),
        }
    }

    /// Move the subtree rooted at `id` out of the arena.
    ///
    /// Walks the subtree in post-order with an explicit stack of partially
    /// built parents.
    fn build(&mut self, id: NodeId) -> Node {
        let mut current = self.take_frame(id);
        let mut parents: Vec<Frame> = Vec::new();
        loop {
            if let Some(child) = current.pending.next() {
                let next = self.take_frame(child);
                parents.push(std::mem::replace(&mut current, next));
                continue;
            }
            let node = current.into_node();
            match parents.pop() {
                Some(mut parent) => {
                    parent.children.push(node);
                    current = parent;
                }
                None => return node,
            }
        }
    }
}

/// A draft whose children are being built.
struct Frame {
    kind: DraftKind,
    pending: std::vec::IntoIter<NodeId>,
    children: Vec<Node>,
}

impl Frame {
    fn into_node(self) -> Node {
        let children = self.children;
        match self.kind {
            DraftKind::Root => Node::Root { children },
            DraftKind::Section { name, ratio } => Node::Section {
                name,
                ratio,
                children,
            },
            DraftKind::Group => Node::Group { children },
            DraftKind::Row { text } => Node::Row { text },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Open {
    id: NodeId,
    indent: usize,
}

/// Parser state: the arena and the stack of open nodes.
///
/// The bottom of the stack is always the root, which is never popped.
struct TreeBuilder {
    arena: Arena,
    stack: Vec<Open>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            arena: Arena::new(),
            stack: vec![Open {
                id: ROOT,
                indent: 0,
            }],
        }
    }

    fn top(&self) -> NodeId {
        self.stack.last().map_or(ROOT, |open| open.id)
    }

    /// Pop the top node and attach it to the node exposed beneath it.
    fn pop_and_attach(&mut self) -> Option<Open> {
        if self.stack.len() <= 1 {
            return None;
        }
        let open = self.stack.pop()?;
        let parent = self.top();
        self.arena.attach(parent, open.id);
        Some(open)
    }

    /// Close every open node at or deeper than `indent`.
    ///
    /// Groups stop the collapse: only `]` closes them.
    fn collapse_to(&mut self, indent: usize) {
        while let Some(&top) = self.stack.last() {
            if self.stack.len() <= 1 || self.arena.is_group(top.id) || top.indent < indent {
                return;
            }
            self.pop_and_attach();
        }
    }

    /// Pop up to and including the nearest open group.
    fn close_group(&mut self, line: usize) -> Result<(), SyntaxError> {
        while let Some(open) = self.pop_and_attach() {
            if self.arena.is_group(open.id) {
                return Ok(());
            }
        }
        Err(SyntaxError::UnmatchedClose { line })
    }

    fn push(&mut self, kind: DraftKind, indent: usize, line: usize) -> Result<(), SyntaxError> {
        // The root sits at the bottom of the stack and does not count.
        if self.stack.len() > MAX_DEPTH {
            return Err(SyntaxError::TooDeep {
                line,
                limit: MAX_DEPTH,
            });
        }
        let id = self.arena.alloc(kind);
        self.stack.push(Open { id, indent });
        Ok(())
    }

    fn append_row(&mut self, text: &str) {
        let parent = self.top();
        let id = self.arena.alloc(DraftKind::Row {
            text: text.to_string(),
        });
        self.arena.attach(parent, id);
    }

    fn finish(mut self) -> Node {
        while self.pop_and_attach().is_some() {}
        self.arena.build(ROOT)
    }
}

fn indent_level(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count() / 2
}

/// Split a section header into its name and optional ratio.
///
/// Headers that do not fit `NAME` or `NAME N/D` (with both numbers positive)
/// keep the whole remainder as the name, so `=a 0/3` is an unratioed section
/// named `a 0/3`.
fn parse_section_header(header: &str) -> DraftKind {
    let rest = header
        .strip_prefix(SECTION_MARKER)
        .unwrap_or(header)
        .trim();
    let fallback = || DraftKind::Section {
        name: rest.to_string(),
        ratio: None,
    };
    let Some(caps) = SECTION_RE.captures(rest) else {
        return fallback();
    };
    let name = caps[1].to_string();
    let ratio = match (caps.get(2), caps.get(3)) {
        (Some(n), Some(d)) => {
            match (n.as_str().parse::<u32>(), d.as_str().parse::<u32>()) {
                (Ok(n), Ok(d)) if n > 0 && d > 0 => Some(Ratio { n, d }),
                _ => return fallback(),
            }
        }
        _ => None,
    };
    DraftKind::Section { name, ratio }
}

/// Parse WireText source into a tree.
///
/// Blank lines are ignored and never close open nodes. Indentation is
/// measured in pairs of leading spaces.
///
/// # Errors
/// Returns [`SyntaxError::UnmatchedClose`] for a `]` with no open group and
/// [`SyntaxError::InvalidNesting`] if a child would be placed under a row.
/// Opening a section or group more than [`MAX_DEPTH`] levels below the root
/// yields [`SyntaxError::TooDeep`].
///
/// # Examples
///
/// ```
/// use wiretext::{Node, parse};
///
/// let tree = parse("=main 1/2\n  hello").unwrap();
/// let Node::Root { children } = tree else { unreachable!() };
/// assert_eq!(children.len(), 1);
/// ```
#[instrument(level = "debug", skip_all)]
pub fn parse(source: &str) -> Result<Node, SyntaxError> {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    let mut builder = TreeBuilder::new();

    for (idx, raw) in normalized.split('\n').enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        let indent = indent_level(line);
        let trimmed = line.trim_start();

        if trimmed == CLOSE_GROUP {
            trace!(line = line_no, "close group");
            builder.close_group(line_no)?;
            continue;
        }

        builder.collapse_to(indent);
        if !builder.arena.accepts_children(builder.top()) {
            return Err(SyntaxError::InvalidNesting { line: line_no });
        }

        if trimmed == OPEN_GROUP {
            trace!(line = line_no, indent, "open group");
            builder.push(DraftKind::Group, indent, line_no)?;
        } else if trimmed.starts_with(SECTION_MARKER) {
            trace!(line = line_no, indent, "section");
            builder.push(parse_section_header(trimmed), indent, line_no)?;
        } else {
            trace!(line = line_no, "row");
            builder.append_row(trimmed);
        }
    }

    let tree = builder.finish();
    debug!(nodes = tree.count(), "parsed document");
    Ok(tree)
}
