//! Converter/merger stand-ins so workflow tests need neither soffice nor qpdf.

use std::path::{Path, PathBuf};

use docmerge_core::convert::Converter;
use docmerge_core::merge::PdfMerger;
use docmerge_core::naming::resolve_conflict;
use docmerge_core::{DocError, Result};

/// Writes `%PDF converted from <name>` to `<dest>/<stem>.pdf` (conflict-resolved).
pub struct FakeConverter;

impl Converter for FakeConverter {
    async fn convert(&self, input: &Path, dest_dir: &Path) -> Result<PathBuf> {
        let stem = input.file_stem().unwrap().to_string_lossy().into_owned();
        let target = resolve_conflict(&dest_dir.join(format!("{stem}.pdf")));
        let name = input.file_name().unwrap().to_string_lossy().into_owned();
        tokio::fs::write(&target, format!("%PDF converted from {name}")).await?;
        Ok(target)
    }
}

pub struct FailingConverter;

impl Converter for FailingConverter {
    async fn convert(&self, _input: &Path, _dest_dir: &Path) -> Result<PathBuf> {
        Err(DocError::ProcessFailed {
            program: "soffice".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "source file could not be loaded".to_string(),
        })
    }
}

/// Concatenates input bytes, in order, into the output.
pub struct FakeMerger;

impl PdfMerger for FakeMerger {
    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        let mut out = Vec::new();
        for p in inputs {
            out.extend(tokio::fs::read(p).await?);
        }
        tokio::fs::write(output, out).await?;
        Ok(())
    }
}

/// Leaves a partial output behind, then fails.
pub struct FailingMerger;

impl PdfMerger for FailingMerger {
    async fn merge(&self, _inputs: &[PathBuf], output: &Path) -> Result<()> {
        tokio::fs::write(output, b"%PDF-partial").await?;
        Err(DocError::ProcessFailed {
            program: "qpdf".to_string(),
            status: "exit status: 2".to_string(),
            stderr: "file is damaged".to_string(),
        })
    }
}

/// Writes `content` to `dir/name` and returns the path.
pub fn source_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, content).unwrap();
    p
}

/// Sorted file names in `dir`.
pub fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
