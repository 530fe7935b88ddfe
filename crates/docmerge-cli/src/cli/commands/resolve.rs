//! `docmerge resolve <path>` – first free variant of a path.

use docmerge_core::naming::resolve_conflict;
use std::path::Path;

pub fn run_resolve(path: &Path) {
    println!("{}", resolve_conflict(path).display());
}
