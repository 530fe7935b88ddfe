//! Linux-safe names for client-supplied upload filenames.

/// Fallback when nothing usable is left after sanitizing.
pub const DEFAULT_UPLOAD_NAME: &str = "upload.bin";

const NAME_MAX: usize = 255;

/// Bytes kept free for the ` (n)` that conflict resolution may append.
const SUFFIX_RESERVE: usize = 16;

/// A trailing `.xxx` longer than this is cut like the rest of the stem.
const MAX_EXTENSION: usize = 16;

/// Sanitizes a client-supplied filename for storing in the upload directory.
///
/// - Keeps only the final component (`/` and `\` both count as separators)
/// - Replaces NUL and control characters with `_` and collapses runs of `_`
/// - Trims leading/trailing spaces and dots
/// - Limits length to 255 bytes (Linux NAME_MAX) minus room for a ` (n)`
///   suffix; only the stem is shortened, the extension survives
///
/// Inner spaces are kept; they separate the words used for merge naming.
pub fn sanitize_upload_name(name: &str) -> String {
    let last = name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(name);

    let mut out = String::with_capacity(last.len());
    let mut prev_underscore = false;
    for c in last.chars() {
        let c = if c == '\0' || c.is_control() { '_' } else { c };
        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.');
    let result = shorten(trimmed, NAME_MAX - SUFFIX_RESERVE);

    if result.is_empty() || result == "." || result == ".." {
        DEFAULT_UPLOAD_NAME.to_string()
    } else {
        result
    }
}

/// Cuts `name` to at most `max` bytes, taking the bytes from the stem.
fn shorten(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }
    let (stem, ext) = match name.rfind('.') {
        Some(i) if i > 0 && name.len() - i <= MAX_EXTENSION => name.split_at(i),
        _ => (name, ""),
    };
    let mut take = max.saturating_sub(ext.len()).min(stem.len());
    while !stem.is_char_boundary(take) {
        take -= 1;
    }
    let stem = stem[..take].trim_end_matches(|c| c == ' ' || c == '.');
    format!("{stem}{ext}")
}
