//! CLI command handlers, one file per command.

mod cancel;
mod files;
mod keep;
mod merge;
mod name;
mod purge;
mod resolve;
mod status;
mod upload;

pub use cancel::run_cancel;
pub use files::run_files;
pub use keep::run_keep;
pub use merge::run_merge;
pub use name::run_name;
pub use purge::run_purge;
pub use resolve::run_resolve;
pub use status::{run_status, status_report};
pub use upload::run_upload;
