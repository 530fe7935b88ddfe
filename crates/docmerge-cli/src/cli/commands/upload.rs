//! `docmerge upload <user> <path>` – accept a file into the user's session.

use anyhow::{Context, Result};
use docmerge_core::session::SessionStore;
use docmerge_core::workflow::{DefaultWorkflow, UploadOutcome};
use std::path::Path;

use crate::cli::display_name;

pub async fn run_upload(
    workflow: &DefaultWorkflow,
    store: &mut SessionStore,
    user: i64,
    path: &Path,
    name: Option<&str>,
    mime: Option<&str>,
) -> Result<()> {
    let original_name = match name {
        Some(n) => n.to_string(),
        None => display_name(path),
    };
    let outcome = workflow
        .accept_upload(store, user, path, &original_name, mime)
        .await
        .with_context(|| format!("failed to store upload {}", path.display()))?;

    match outcome {
        UploadOutcome::Accepted { path, first } => {
            println!("Stored {}", path.display());
            if first {
                println!(
                    "Merge all uploaded files into one PDF (`docmerge merge {user}`) \
                     or keep them as they are (`docmerge keep {user}`)?"
                );
            } else {
                println!("{} files pending", store.files(user).len());
            }
        }
        UploadOutcome::Rejected { name } => {
            println!("{name} is not supported; only PDF and Word are accepted.");
        }
        UploadOutcome::ConversionFailed { name, reason } => {
            println!("Could not convert {name}: {reason}");
        }
    }
    Ok(())
}
