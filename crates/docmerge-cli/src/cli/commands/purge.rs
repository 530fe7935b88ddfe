//! `docmerge purge [--yes]` – empty the upload directory.

use anyhow::Result;
use docmerge_core::session::SessionStore;
use docmerge_core::workflow::DefaultWorkflow;

pub async fn run_purge(workflow: &DefaultWorkflow, store: &mut SessionStore, yes: bool) -> Result<()> {
    if !yes {
        let files = workflow.list_uploads().await?;
        println!(
            "Would remove {} file(s) from {}. This cannot be undone; re-run with --yes.",
            files.len(),
            workflow.upload_dir().display()
        );
        return Ok(());
    }
    let n = workflow.purge_uploads(store).await?;
    println!("Removed {n} file(s).");
    Ok(())
}
