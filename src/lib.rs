//! Compiler for the WireText wireframe language.
//!
//! A WireText document is parsed into a small tree of sections, groups and
//! rows, which is then rendered either as a fixed-width ASCII layout or as a
//! self-contained HTML document. Every step is a pure function of its input:
//! parsing the same source and rendering at the same width always yields
//! byte-identical output.
//!
//! ```
//! let tree = wiretext::parse("=main\n  # Title\n  !!\"Go\"").unwrap();
//! let lines = wiretext::render_ascii(&tree, 80);
//! assert_eq!(lines, vec!["Title", "", "[! Go]"]);
//! ```

#[macro_use]
mod macros;

pub mod ascii;
pub mod ast;
pub mod error;
pub mod html;
pub mod io;
pub mod normalize;
pub mod parser;
pub mod process;
pub mod table;
pub mod wrap;

#[doc(hidden)]
pub mod test_utils;

pub use ascii::{COLUMN_FLOOR, COLUMN_GAP, render_ascii};
pub use ast::{Node, Ratio, deserialize, serialize};
pub use error::{FileError, RenderError, SyntaxError, TreeError};
pub use html::{escape_html, render_html_document};
pub use io::{output_path, output_paths, render_file, write_rendered};
pub use normalize::{KNOWN_INPUT_TYPES, normalize_row};
pub use parser::{MAX_DEPTH, parse};
pub use process::{DEFAULT_WIDTH, Format, MIN_WIDTH, RenderOptions, render_source, render_tree};
pub use wrap::wrap;
