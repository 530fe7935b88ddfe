//! PDF concatenation through an external tool.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::MergerConfig;
use crate::error::{DocError, Result};
use crate::process;

/// Concatenates PDFs in the given order into `output`.
#[allow(async_fn_in_trait)]
pub trait PdfMerger {
    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<()>;
}

/// `qpdf --empty --pages <inputs...> -- <output>`.
#[derive(Debug, Clone)]
pub struct QpdfMerger {
    program: String,
    timeout: Duration,
}

/// qpdf exits 3 when it succeeded with warnings (e.g. a slightly damaged input it could repair).
const QPDF_OK_CODES: &[i32] = &[0, 3];

impl QpdfMerger {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &MergerConfig) -> Self {
        Self::new(cfg.program.clone(), Duration::from_secs(cfg.timeout_secs))
    }

    fn args(inputs: &[PathBuf], output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--empty".into(), "--pages".into()];
        args.extend(inputs.iter().map(|p| p.as_os_str().to_owned()));
        args.push("--".into());
        args.push(output.as_os_str().to_owned());
        args
    }
}

impl PdfMerger for QpdfMerger {
    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        if inputs.is_empty() {
            return Err(DocError::EmptyMerge);
        }
        let out = process::run(&self.program, &Self::args(inputs, output), self.timeout).await?;
        process::ensure_success(&self.program, &out, QPDF_OK_CODES)?;
        if !output.is_file() {
            return Err(DocError::MissingOutput {
                path: output.to_path_buf(),
            });
        }
        tracing::info!(files = inputs.len(), output = %output.display(), "merged pdfs");
        Ok(())
    }
}
