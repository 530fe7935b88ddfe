//! `docmerge keep <user>` – hand pending uploads back as they are.

use anyhow::Result;
use docmerge_core::session::SessionStore;
use docmerge_core::workflow::DefaultWorkflow;

pub fn run_keep(workflow: &DefaultWorkflow, store: &mut SessionStore, user: i64) -> Result<()> {
    let files = workflow.keep(store, user);
    if files.is_empty() {
        println!("No pending files.");
    }
    for f in files {
        println!("{}", f.display());
    }
    Ok(())
}
