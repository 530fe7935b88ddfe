//! Existence oracle used by the resolver.
//!
//! The upload directory is the only "database" the naming logic consults.
//! Keeping the lookup behind a trait lets the resolver run against an
//! in-memory set in tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Answers "is something already at this path?".
pub trait Existence {
    fn exists(&self, path: &Path) -> bool;
}

/// Asks the operating system. Any entry counts, including dangling symlinks,
/// so a resolved path is never one that a later create would clobber.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsExistence;

impl Existence for FsExistence {
    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }
}

/// A fixed set of taken paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryExistence {
    taken: HashSet<PathBuf>,
}

impl MemoryExistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as taken. Returns false if it already was.
    pub fn insert(&mut self, path: impl Into<PathBuf>) -> bool {
        self.taken.insert(path.into())
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for MemoryExistence {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            taken: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Existence for MemoryExistence {
    fn exists(&self, path: &Path) -> bool {
        self.taken.contains(path)
    }
}
