//! `docmerge name <paths...>` – preview the merged-file name.

use docmerge_core::naming::{generate_merge_name_with, CommonTokenRule, FsExistence};
use std::path::{Path, PathBuf};

pub fn run_name(paths: &[PathBuf], dir: &Path, rule: CommonTokenRule) {
    let out = generate_merge_name_with(&FsExistence, paths, dir, rule);
    println!("{}", out.display());
}
