//! `docmerge cancel <user>` – drop pending uploads.

use anyhow::Result;
use docmerge_core::session::SessionStore;
use docmerge_core::workflow::DefaultWorkflow;

pub async fn run_cancel(workflow: &DefaultWorkflow, store: &mut SessionStore, user: i64) -> Result<()> {
    let n = workflow.cancel(store, user).await?;
    println!("Cancelled. Removed {n} uploaded file(s).");
    Ok(())
}
