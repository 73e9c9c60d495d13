//! File helpers for rendering WireText documents from disk.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::FileError,
    process::{Format, RenderOptions, render_source},
};

/// Stem used for outputs whose source has no usable file name.
const FALLBACK_STEM: &str = "wiretext";

/// Read and render one source file.
///
/// # Errors
/// Returns [`FileError::Io`] if the file cannot be read and
/// [`FileError::Render`] if it does not parse or cannot be rendered.
pub fn render_file(path: &Path, opts: RenderOptions) -> Result<String, FileError> {
    let source = fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    render_source(&source, opts).map_err(|source| FileError::Render {
        path: path.to_path_buf(),
        source,
    })
}

/// Where the rendering of `input` lands inside `out_dir`.
///
/// The input's stem gets the format's extension, so `form.wt` becomes
/// `form.txt`, `form.html` or `form.ast.json`.
#[must_use]
pub fn output_path(input: &Path, out_dir: &Path, format: Format) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_STEM);
    out_dir.join(format!("{stem}.{}", format.extension()))
}

/// Output paths for every input, in input order.
///
/// # Errors
/// Returns [`FileError::Collision`] naming the first two inputs that would
/// be written to the same file, for instance `a/form.wt` and `b/form.wt`.
pub fn output_paths(
    inputs: &[PathBuf],
    out_dir: &Path,
    format: Format,
) -> Result<Vec<PathBuf>, FileError> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::with_capacity(inputs.len());
    let mut targets = Vec::with_capacity(inputs.len());
    for input in inputs {
        let target = output_path(input, out_dir, format);
        if let Some(first) = claimed.insert(target.clone(), input) {
            return Err(FileError::Collision {
                first: first.to_path_buf(),
                second: input.clone(),
                target,
            });
        }
        targets.push(target);
    }
    Ok(targets)
}

/// Write rendered output followed by a newline.
///
/// # Errors
/// Returns an error if writing the file fails.
pub fn write_rendered(path: &Path, rendered: &str) -> std::io::Result<()> {
    fs::write(path, format!("{rendered}\n"))
}
