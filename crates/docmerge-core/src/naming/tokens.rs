//! Filename tokenization for merge naming.

use std::path::Path;

/// Lower-cased word tokens of a filename, directory and extension stripped.
///
/// Tokens are maximal runs of letters and digits; everything else, including
/// `_`, separates them. `Report_Final (v2).pdf` → `["report", "final", "v2"]`.
pub fn filename_tokens(path: &Path) -> Vec<String> {
    match path.file_stem() {
        Some(stem) => tokenize(&stem.to_string_lossy().to_lowercase()),
        None => Vec::new(),
    }
}

fn tokenize(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
