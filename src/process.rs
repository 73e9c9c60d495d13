//! High-level WireText processing: parse once, render in the chosen format.

use std::fmt;

use tracing::{debug, instrument};

use crate::{
    ascii::render_ascii,
    ast::{Node, serialize},
    error::{RenderError, TreeError},
    html::render_html_document,
    parser::parse,
};

/// Narrowest layout width accepted for ASCII output.
pub const MIN_WIDTH: usize = 60;

/// Layout width used when none is given.
pub const DEFAULT_WIDTH: usize = 120;

/// Output representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Fixed-width text layout.
    #[default]
    Ascii,
    /// Self-contained HTML document.
    Html,
    /// JSON dump of the parsed tree.
    Json,
}

impl Format {
    /// File extension used when writing this format to disk.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Ascii => "txt",
            Format::Html => "html",
            Format::Json => "ast.json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Ascii => "ascii",
            Format::Html => "html",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}

/// Rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: Format,
    width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(Format::default(), DEFAULT_WIDTH)
    }
}

impl RenderOptions {
    /// Build options, raising `width` to [`MIN_WIDTH`] when it is narrower.
    #[must_use]
    pub fn new(format: Format, width: usize) -> Self {
        Self {
            format,
            width: width.max(MIN_WIDTH),
        }
    }

    /// The clamped layout width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Render an already parsed tree.
///
/// ASCII lines are joined with `\n`, without a trailing newline.
///
/// # Errors
/// Returns a [`TreeError`] if the JSON dump cannot be produced.
pub fn render_tree(tree: &Node, opts: RenderOptions) -> Result<String, TreeError> {
    match opts.format {
        Format::Ascii => Ok(render_ascii(tree, opts.width).join("\n")),
        Format::Html => Ok(render_html_document(tree)),
        Format::Json => serialize(tree),
    }
}

/// Parse `source` and render it.
///
/// # Errors
/// Returns [`RenderError::Syntax`] when [`parse`] rejects the source and
/// [`RenderError::Tree`] when the tree cannot be dumped.
///
/// # Examples
///
/// ```
/// use wiretext::{Format, RenderOptions, render_source};
///
/// let opts = RenderOptions::new(Format::Ascii, 10);
/// assert_eq!(opts.width(), 60);
/// assert_eq!(render_source("=main\n  ^email", opts).unwrap(), "[email]");
/// ```
#[instrument(level = "debug", skip(source))]
pub fn render_source(source: &str, opts: RenderOptions) -> Result<String, RenderError> {
    let tree = parse(source)?;
    let out = render_tree(&tree, opts)?;
    debug!(bytes = out.len(), format = %opts.format, "rendered document");
    Ok(out)
}
