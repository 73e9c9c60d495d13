//! Error types for parsing and tree rehydration.

use std::path::PathBuf;

use thiserror::Error;

/// A structural error in WireText source.
///
/// The `Display` form is meant to be shown to the author verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A `]` line with no open group anywhere on the stack.
    #[error("line {line}: encountered ']' without matching '['")]
    UnmatchedClose { line: usize },

    /// A child was about to be attached under a row.
    #[error("line {line}: cannot nest under row content")]
    InvalidNesting { line: usize },

    /// Opening this node would exceed the nesting limit.
    #[error("line {line}: nesting is deeper than {limit} levels")]
    TooDeep { line: usize, limit: usize },
}

impl SyntaxError {
    /// The 1-based source line the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            SyntaxError::UnmatchedClose { line }
            | SyntaxError::InvalidNesting { line }
            | SyntaxError::TooDeep { line, .. } => *line,
        }
    }
}

/// Failure to rehydrate a serialized tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid tree dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tree dump must start with a root node, found {0}")]
    NotRoot(&'static str),
}

/// Failure to turn source text into output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Failure to render a source file or to place its output.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// Two inputs would be written to the same output file.
    #[error("{} and {} would both be written to {}", first.display(), second.display(), target.display())]
    Collision {
        first: PathBuf,
        second: PathBuf,
        target: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_line_numbers() {
        let err = SyntaxError::UnmatchedClose { line: 4 };
        assert_eq!(err.to_string(), "line 4: encountered ']' without matching '['");
        assert_eq!(err.line(), 4);
        let err = SyntaxError::InvalidNesting { line: 2 };
        assert_eq!(err.to_string(), "line 2: cannot nest under row content");
        let err = SyntaxError::TooDeep { line: 9, limit: 48 };
        assert_eq!(err.to_string(), "line 9: nesting is deeper than 48 levels");
        assert_eq!(err.line(), 9);
    }

    #[test]
    fn file_errors_prefix_the_path() {
        let err = FileError::Render {
            path: PathBuf::from("demo.wt"),
            source: SyntaxError::UnmatchedClose { line: 7 }.into(),
        };
        assert_eq!(
            err.to_string(),
            "demo.wt: line 7: encountered ']' without matching '['"
        );
    }

    #[test]
    fn collisions_name_both_inputs() {
        let err = FileError::Collision {
            first: PathBuf::from("a/form.wt"),
            second: PathBuf::from("b/form.wt"),
            target: PathBuf::from("out/form.txt"),
        };
        assert_eq!(
            err.to_string(),
            "a/form.wt and b/form.wt would both be written to out/form.txt"
        );
    }
}
