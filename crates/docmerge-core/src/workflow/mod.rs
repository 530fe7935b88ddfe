//! Per-request operations: accept an upload, then merge, keep or cancel the
//! user's pending files; list or purge the upload directory.

mod dir;
mod finish;
mod upload;

use std::path::{Component, Path, PathBuf};

use crate::config::DocmergeConfig;
use crate::convert::{Converter, SofficeConverter};
use crate::merge::{PdfMerger, QpdfMerger};
use crate::naming::CommonTokenRule;

/// Result of [`Workflow::accept_upload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Stored (converted if needed) and added to the session. `first` is true
    /// for the session's first file, when the front end should ask whether to
    /// merge or keep.
    Accepted { path: PathBuf, first: bool },
    /// Not a PDF or Word document; nothing kept.
    Rejected { name: String },
    /// Word document the converter could not handle; nothing kept.
    ConversionFailed { name: String, reason: String },
}

/// Upload workflow over one flat upload directory.
#[derive(Debug, Clone)]
pub struct Workflow<C, M> {
    upload_dir: PathBuf,
    converter: C,
    merger: M,
    exclusive_create: bool,
    rule: CommonTokenRule,
}

/// Workflow with the external `soffice` / `qpdf` tools.
pub type DefaultWorkflow = Workflow<SofficeConverter, QpdfMerger>;

impl DefaultWorkflow {
    pub fn from_config(cfg: &DocmergeConfig) -> Self {
        Workflow::new(
            cfg.upload_dir.clone(),
            SofficeConverter::from_config(&cfg.converter),
            QpdfMerger::from_config(&cfg.merger),
        )
        .with_exclusive_create(cfg.naming.exclusive_create)
        .with_common_token_rule(cfg.naming.common_token_rule())
    }
}

impl<C: Converter, M: PdfMerger> Workflow<C, M> {
    /// A relative `upload_dir` is anchored at the current directory here, so
    /// paths saved in sessions stay valid from any later working directory.
    pub fn new(upload_dir: impl Into<PathBuf>, converter: C, merger: M) -> Self {
        Self {
            upload_dir: absolute_dir(upload_dir.into()),
            converter,
            merger,
            exclusive_create: false,
            rule: CommonTokenRule::default(),
        }
    }

    /// Place uploads with create-new semantics rather than check-then-create.
    pub fn with_exclusive_create(mut self, on: bool) -> Self {
        self.exclusive_create = on;
        self
    }

    pub fn with_common_token_rule(mut self, rule: CommonTokenRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

fn absolute_dir(dir: PathBuf) -> PathBuf {
    let dir = if dir.is_absolute() {
        dir
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(dir),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), "cannot resolve relative upload dir: {}", e);
                return dir;
            }
        }
    };
    dir.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocmergeConfig;

    #[test]
    fn relative_upload_dir_is_made_absolute() {
        let cfg = DocmergeConfig::default();
        let wf = DefaultWorkflow::from_config(&cfg);
        assert!(wf.upload_dir().is_absolute(), "{}", wf.upload_dir().display());
        assert!(wf.upload_dir().ends_with("uploaded_files"));
        assert!(!wf
            .upload_dir()
            .components()
            .any(|c| matches!(c, Component::CurDir)));
        assert_eq!(
            wf.upload_dir(),
            std::env::current_dir().unwrap().join("uploaded_files")
        );
    }

    #[test]
    fn absolute_upload_dir_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DocmergeConfig {
            upload_dir: dir.path().to_path_buf(),
            ..DocmergeConfig::default()
        };
        assert_eq!(DefaultWorkflow::from_config(&cfg).upload_dir(), dir.path());
    }
}
