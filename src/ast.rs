//! WireText document tree.
//!
//! The tree is a closed sum type of four node kinds. Rows are leaves holding
//! raw inline markup; each renderer interprets that markup on its own.

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Relative share of space a section claims among ratioed siblings.
///
/// Serialized as `{"n": .., "d": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub n: u32,
    pub d: u32,
}

impl Ratio {
    /// The ratio as a fraction.
    ///
    /// A zero denominator never comes out of the parser but may arrive via a
    /// hand-written dump; it is treated as a zero share.
    #[must_use]
    pub fn value(self) -> f64 {
        if self.d == 0 {
            return 0.0;
        }
        f64::from(self.n) / f64::from(self.d)
    }
}

/// A node of the WireText tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// The document itself; exactly one per tree and never nested.
    Root { children: Vec<Node> },
    /// A named block stacking its children vertically.
    Section {
        name: String,
        ratio: Option<Ratio>,
        children: Vec<Node>,
    },
    /// Columns laid out side by side.
    Group { children: Vec<Node> },
    /// One line of inline markup.
    Row { text: String },
}

impl Node {
    /// Child nodes, empty for rows.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children } | Node::Section { children, .. } | Node::Group { children } => {
                children
            }
            Node::Row { .. } => &[],
        }
    }

    /// Declared ratio of a section, `None` for every other kind.
    #[must_use]
    pub fn ratio(&self) -> Option<Ratio> {
        match self {
            Node::Section { ratio, .. } => *ratio,
            _ => None,
        }
    }

    /// Whether this node is a section carrying a ratio.
    #[must_use]
    pub fn is_ratioed_section(&self) -> bool {
        self.ratio().is_some()
    }

    /// Lowercase kind name, matching the `type` field of the JSON dump.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root { .. } => "root",
            Node::Section { .. } => "section",
            Node::Group { .. } => "group",
            Node::Row { .. } => "row",
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }
}

/// Dump a tree as pretty-printed JSON with two-space indentation.
///
/// # Errors
/// Returns an error only if `serde_json` fails to serialize, which cannot
/// happen for this tree shape.
pub fn serialize(tree: &Node) -> Result<String, TreeError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Rehydrate a tree from a dump produced by [`serialize`].
///
/// # Errors
/// Returns [`TreeError::Json`] for malformed input and
/// [`TreeError::NotRoot`] when the top-level node is not a root.
pub fn deserialize(json: &str) -> Result<Node, TreeError> {
    let node: Node = serde_json::from_str(json)?;
    match node {
        Node::Root { .. } => Ok(node),
        other => Err(TreeError::NotRoot(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Root {
            children: vec![Node::Section {
                name: "main".into(),
                ratio: Some(Ratio { n: 1, d: 2 }),
                children: vec![Node::Row {
                    text: "# Title".into(),
                }],
            }],
        }
    }

    #[test]
    fn dump_uses_type_tags_and_field_order() {
        let json = serialize(&sample()).unwrap();
        let type_at = json.find("\"type\": \"section\"").unwrap();
        let name_at = json.find("\"name\"").unwrap();
        let ratio_at = json.find("\"ratio\"").unwrap();
        assert!(type_at < name_at && name_at < ratio_at);
        assert!(json.contains("\"n\": 1"));
        assert!(json.contains("\"text\": \"# Title\""));
    }

    #[test]
    fn missing_ratio_is_null() {
        let tree = Node::Root {
            children: vec![Node::Section {
                name: "x".into(),
                ratio: None,
                children: Vec::new(),
            }],
        };
        assert!(serialize(&tree).unwrap().contains("\"ratio\": null"));
    }

    #[test]
    fn rehydrates_dump() {
        let tree = sample();
        let back = deserialize(&serialize(&tree).unwrap()).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn rejects_non_root_dump() {
        let err = deserialize(r#"{"type": "row", "text": "x"}"#).unwrap_err();
        assert!(matches!(err, TreeError::NotRoot("row")));
    }

    #[test]
    fn counts_nodes() {
        assert_eq!(sample().count(), 3);
    }

    #[test]
    fn zero_denominator_is_zero_share() {
        assert!(Ratio { n: 3, d: 0 }.value().abs() < f64::EPSILON);
    }
}
