//! Output naming for uploads and merged documents.
//!
//! Two jobs: pick a path in the upload directory that does not collide with
//! an existing file, and derive a readable merged-PDF name from words shared
//! by all input filenames.

mod exists;
mod merge_name;
mod resolve;
mod tokens;

pub use exists::{Existence, FsExistence, MemoryExistence};
pub use merge_name::{
    common_tokens, generate_merge_name, generate_merge_name_with, merge_file_name,
    CommonTokenRule, DEFAULT_MERGED_NAME, MAX_COMMON_TOKENS, MERGED_SUFFIX,
};
pub use resolve::{claim_exclusive, resolve_conflict, resolve_conflict_with};
pub use tokens::filename_tokens;
