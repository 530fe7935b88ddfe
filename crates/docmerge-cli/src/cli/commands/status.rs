//! `docmerge status <user>` – show what a user's pending session holds.

use anyhow::Result;
use docmerge_core::session::SessionStore;

use crate::cli::display_name;

pub fn run_status(store: &SessionStore, user: i64) -> Result<()> {
    print!("{}", status_report(store, user));
    Ok(())
}

/// Upload transcript followed by the pending files, one per line.
pub fn status_report(store: &SessionStore, user: i64) -> String {
    let Some(session) = store.get(user) else {
        return "No session.\n".to_string();
    };
    let mut out = String::new();
    for line in &session.log {
        out.push_str(line);
        out.push('\n');
    }
    if session.files.is_empty() {
        out.push_str("No pending files.\n");
    } else {
        out.push_str(&format!("Pending files ({}):\n", session.files.len()));
        for f in &session.files {
            out.push_str(&format!("  {}\n", display_name(f)));
        }
    }
    out
}
