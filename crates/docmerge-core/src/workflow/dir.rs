use std::path::PathBuf;

use super::upload::remove_quietly;
use super::Workflow;
use crate::convert::Converter;
use crate::error::Result;
use crate::merge::PdfMerger;
use crate::session::SessionStore;

impl<C: Converter, M: PdfMerger> Workflow<C, M> {
    /// Regular files in the upload directory, sorted by path. A missing
    /// directory has no files.
    pub async fn list_uploads(&self) -> Result<Vec<PathBuf>> {
        let mut entries = match tokio::fs::read_dir(&self.upload_dir).await {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Deletes every regular file in the upload directory and drops all
    /// sessions, whose files are gone with it.
    pub async fn purge_uploads(&self, store: &mut SessionStore) -> Result<usize> {
        let files = self.list_uploads().await?;
        for f in &files {
            remove_quietly(f).await;
        }
        store.clear();
        tracing::info!(dir = %self.upload_dir.display(), files = files.len(), "purged uploads");
        Ok(files.len())
    }
}
