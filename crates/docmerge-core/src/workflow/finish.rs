use std::path::PathBuf;

use super::upload::remove_quietly;
use super::Workflow;
use crate::convert::Converter;
use crate::error::{DocError, Result};
use crate::merge::PdfMerger;
use crate::naming::{generate_merge_name_with, FsExistence};
use crate::session::SessionStore;

impl<C: Converter, M: PdfMerger> Workflow<C, M> {
    /// Merges the user's pending files into one PDF named after their common
    /// words and returns its path.
    ///
    /// The inputs are deleted and the session cleared whether or not the
    /// merge succeeds; a failed merge leaves no partial output behind.
    pub async fn merge(&self, store: &mut SessionStore, user: i64) -> Result<PathBuf> {
        let files = store.files(user).to_vec();
        if files.is_empty() {
            return Err(DocError::NoFiles);
        }

        let output = generate_merge_name_with(&FsExistence, &files, &self.upload_dir, self.rule);
        tracing::info!(user, files = files.len(), output = %output.display(), "merging");
        let merged = self.merger.merge(&files, &output).await;

        for f in &files {
            match tokio::fs::remove_file(f).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::warn!(path = %f.display(), "pending file already gone")
                }
                Err(e) => tracing::warn!(path = %f.display(), "could not delete file: {}", e),
            }
        }
        store.take(user);

        if let Err(e) = merged {
            tracing::error!(user, "merge failed: {}", e);
            remove_quietly(&output).await;
            return Err(e);
        }
        Ok(output)
    }

    /// Hands the pending files back unmerged and clears the session. The
    /// files stay on disk for the caller to deliver.
    pub fn keep(&self, store: &mut SessionStore, user: i64) -> Vec<PathBuf> {
        let files = store.take(user).files;
        tracing::info!(user, files = files.len(), "keeping files unmerged");
        files
    }

    /// Deletes the pending files and clears the session. Returns how many
    /// files were pending.
    pub async fn cancel(&self, store: &mut SessionStore, user: i64) -> Result<usize> {
        let files = store.take(user).files;
        for f in &files {
            remove_quietly(f).await;
        }
        tracing::info!(user, files = files.len(), "cancelled");
        Ok(files.len())
    }
}
