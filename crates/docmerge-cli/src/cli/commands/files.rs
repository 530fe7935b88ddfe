//! `docmerge files` – list the upload directory.

use anyhow::Result;
use docmerge_core::workflow::DefaultWorkflow;

pub async fn run_files(workflow: &DefaultWorkflow) -> Result<()> {
    let files = workflow.list_uploads().await?;
    if files.is_empty() {
        println!("No files in {}.", workflow.upload_dir().display());
    } else {
        println!("{} file(s) in {}:", files.len(), workflow.upload_dir().display());
        for f in files {
            println!("  {}", crate::cli::display_name(&f));
        }
    }
    Ok(())
}
