//! `docmerge merge <user>` – merge pending uploads into one PDF.

use anyhow::Result;
use docmerge_core::session::SessionStore;
use docmerge_core::workflow::DefaultWorkflow;
use docmerge_core::DocError;

pub async fn run_merge(workflow: &DefaultWorkflow, store: &mut SessionStore, user: i64) -> Result<()> {
    match workflow.merge(store, user).await {
        Ok(path) => {
            println!("Merged into {}", path.display());
            Ok(())
        }
        Err(DocError::NoFiles) => {
            println!("No files to merge.");
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context("merge failed; one or more of the files may be damaged")),
    }
}
