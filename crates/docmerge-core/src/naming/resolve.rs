//! Conflict resolution: `name.pdf` → `name (1).pdf` → `name (2).pdf` ...

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use super::exists::{Existence, FsExistence};

/// Returns `path` if nothing exists there, otherwise the first free
/// `"{base} ({n}){ext}"` for n = 1, 2, ...
///
/// Check-then-act: two callers racing on the same base name can both get the
/// same answer. Use [`claim_exclusive`] when that matters.
pub fn resolve_conflict(path: &Path) -> PathBuf {
    resolve_conflict_with(&FsExistence, path)
}

/// [`resolve_conflict`] against an arbitrary existence oracle.
pub fn resolve_conflict_with<E: Existence + ?Sized>(existence: &E, path: &Path) -> PathBuf {
    if !existence.exists(path) {
        return path.to_path_buf();
    }

    let (base, ext) = split_extension(path);
    let mut n: u64 = 1;
    loop {
        let candidate = numbered(&base, &ext, n);
        if !existence.exists(&candidate) {
            tracing::debug!(
                requested = %path.display(),
                resolved = %candidate.display(),
                "name taken, using numbered variant"
            );
            return candidate;
        }
        n += 1;
    }
}

/// Same naming sequence as [`resolve_conflict`], but each candidate is
/// created with create-new semantics, so the returned path is owned by the
/// caller once this returns.
pub fn claim_exclusive(path: &Path) -> io::Result<(PathBuf, File)> {
    let (base, ext) = split_extension(path);
    let mut candidate = path.to_path_buf();
    let mut n: u64 = 0;
    loop {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                n += 1;
                candidate = numbered(&base, &ext, n);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Splits at the last dot of the final component. A leading dot does not
/// start an extension (`.env` has none); a trailing dot is an empty one
/// (`notes.` → `notes` + `.`).
pub(crate) fn split_extension(path: &Path) -> (OsString, OsString) {
    match path.extension() {
        Some(ext) => {
            let mut dotted = OsString::from(".");
            dotted.push(ext);
            (path.with_extension("").into_os_string(), dotted)
        }
        None => (path.as_os_str().to_owned(), OsString::new()),
    }
}

fn numbered(base: &OsString, ext: &OsString, n: u64) -> PathBuf {
    let mut s = base.clone();
    s.push(format!(" ({n})"));
    s.push(ext);
    PathBuf::from(s)
}
