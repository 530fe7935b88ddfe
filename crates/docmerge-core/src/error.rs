//! Error type for the upload/convert/merge workflow.
//!
//! Naming never fails; everything that touches external processes, the
//! upload directory, or the session file reports a [`DocError`].

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    /// The user has no pending files.
    #[error("no files to merge")]
    NoFiles,

    /// A merger was asked to merge an empty input list.
    #[error("nothing to merge: input list is empty")]
    EmptyMerge,

    /// The external program could not be started (not installed, not executable).
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The external program ran but reported failure.
    #[error("{program} exited with {status}: {stderr}")]
    ProcessFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// The external program did not finish in time and was killed.
    #[error("{program} timed out after {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    /// The external program exited cleanly but the expected file is missing.
    #[error("expected output not produced: {}", .path.display())]
    MissingOutput { path: PathBuf },

    /// Session file could not be encoded or decoded.
    #[error("session store error: {0}")]
    Session(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DocError>;
