//! Word → PDF conversion through an external office suite.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::ConverterConfig;
use crate::error::{DocError, Result};
use crate::naming::resolve_conflict;
use crate::process;

/// Turns a document into a PDF placed in `dest_dir`.
#[allow(async_fn_in_trait)]
pub trait Converter {
    /// Returns the path of the new PDF. The input is left in place.
    async fn convert(&self, input: &Path, dest_dir: &Path) -> Result<PathBuf>;
}

/// `soffice --headless --convert-to pdf`.
///
/// LibreOffice always names its output after the input stem, so it writes
/// into a private scratch directory and the result is moved to a
/// conflict-free name in `dest_dir` afterwards.
#[derive(Debug, Clone)]
pub struct SofficeConverter {
    program: String,
    timeout: Duration,
}

impl SofficeConverter {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &ConverterConfig) -> Self {
        Self::new(cfg.program.clone(), Duration::from_secs(cfg.timeout_secs))
    }

    fn args(input: &Path, outdir: &Path) -> Vec<OsString> {
        vec![
            "--headless".into(),
            "--convert-to".into(),
            "pdf".into(),
            input.as_os_str().to_owned(),
            "--outdir".into(),
            outdir.as_os_str().to_owned(),
        ]
    }
}

impl Converter for SofficeConverter {
    async fn convert(&self, input: &Path, dest_dir: &Path) -> Result<PathBuf> {
        let scratch = tempfile::Builder::new()
            .prefix(".convert-")
            .tempdir_in(dest_dir)?;

        let output =
            process::run(&self.program, &Self::args(input, scratch.path()), self.timeout).await?;
        process::ensure_success(&self.program, &output, &[0])?;

        let pdf_name = pdf_name_for(input);
        let produced = scratch.path().join(&pdf_name);
        if !produced.is_file() {
            return Err(DocError::MissingOutput { path: produced });
        }

        let target = resolve_conflict(&dest_dir.join(&pdf_name));
        tokio::fs::rename(&produced, &target).await?;
        tracing::info!(
            input = %input.display(),
            output = %target.display(),
            "converted to pdf"
        );
        Ok(target)
    }
}

/// `report.docx` → `report.pdf`.
pub(crate) fn pdf_name_for(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or_else(|| OsStr::new("document"))
        .to_owned();
    name.push(".pdf");
    PathBuf::from(name)
}
