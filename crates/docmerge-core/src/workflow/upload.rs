use std::path::{Path, PathBuf};

use super::{UploadOutcome, Workflow};
use crate::convert::Converter;
use crate::error::Result;
use crate::kind::DocumentKind;
use crate::merge::PdfMerger;
use crate::naming::{claim_exclusive, resolve_conflict};
use crate::sanitize::sanitize_upload_name;
use crate::session::SessionStore;

impl<C: Converter, M: PdfMerger> Workflow<C, M> {
    /// Copies `source` into the upload directory under a conflict-free
    /// version of `original_name`, converts Word documents to PDF, and adds
    /// the result to `user`'s session.
    ///
    /// `mime` is what the client declared; without one the extension of
    /// `original_name` decides. Unsupported or unconvertible uploads are
    /// removed again and reported through the outcome, not as errors.
    pub async fn accept_upload(
        &self,
        store: &mut SessionStore,
        user: i64,
        source: &Path,
        original_name: &str,
        mime: Option<&str>,
    ) -> Result<UploadOutcome> {
        let name = sanitize_upload_name(original_name);
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let stored = self.store_copy(source, &name).await?;
        tracing::debug!(user, name = %name, path = %stored.display(), "upload stored");

        let kind = match mime {
            Some(m) => DocumentKind::from_mime(m),
            None => DocumentKind::from_extension(Path::new(&name)),
        };
        let Some(kind) = kind else {
            remove_quietly(&stored).await;
            tracing::info!(user, name = %name, mime = ?mime, "rejected unsupported upload");
            store.push_log(user, format!("{name} is not supported; only PDF and Word are accepted"));
            return Ok(UploadOutcome::Rejected { name });
        };

        let pdf = if kind.needs_conversion() {
            match self.converter.convert(&stored, &self.upload_dir).await {
                Ok(pdf) => {
                    remove_quietly(&stored).await;
                    store.push_log(user, format!("{name} converted to PDF"));
                    pdf
                }
                Err(e) => {
                    remove_quietly(&stored).await;
                    tracing::error!(user, name = %name, "conversion failed: {}", e);
                    store.push_log(user, format!("could not convert {name}: {e}"));
                    return Ok(UploadOutcome::ConversionFailed {
                        name,
                        reason: e.to_string(),
                    });
                }
            }
        } else {
            stored
        };

        let count = store.push_file(user, pdf.clone());
        store.push_log(user, format!("{name} processed"));
        tracing::info!(user, path = %pdf.display(), pending = count, "upload accepted");
        Ok(UploadOutcome::Accepted {
            path: pdf,
            first: count == 1,
        })
    }

    async fn store_copy(&self, source: &Path, name: &str) -> Result<PathBuf> {
        let wanted = self.upload_dir.join(name);
        let target = if self.exclusive_create {
            let (path, _file) = claim_exclusive(&wanted)?;
            path
        } else {
            resolve_conflict(&wanted)
        };
        if let Err(e) = tokio::fs::copy(source, &target).await {
            if self.exclusive_create {
                remove_quietly(&target).await;
            }
            return Err(e.into());
        }
        Ok(target)
    }
}

/// Best-effort delete; a file that is already gone is fine.
pub(super) async fn remove_quietly(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "deleted file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), "could not delete file: {}", e),
    }
}
