//! Merged-output naming from words shared by all input filenames.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::exists::{Existence, FsExistence};
use super::resolve::resolve_conflict_with;
use super::tokens::filename_tokens;

/// Name used when there is nothing in common (or nothing at all).
pub const DEFAULT_MERGED_NAME: &str = "merged.pdf";

/// Appended to the joined common words.
pub const MERGED_SUFFIX: &str = "_merged.pdf";

/// At most this many common words go into a merged name.
pub const MAX_COMMON_TOKENS: usize = 3;

/// How "common to every input" is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommonTokenRule {
    /// Token present in every file's own token set.
    #[default]
    Intersection,
    /// Total occurrences across all files equal the number of files. A word
    /// doubled in one name and missing from another still qualifies.
    OccurrenceCount,
}

/// Words common to all `paths`, in order of first appearance.
pub fn common_tokens<P: AsRef<Path>>(paths: &[P], rule: CommonTokenRule) -> Vec<String> {
    let per_file: Vec<Vec<String>> = paths.iter().map(|p| filename_tokens(p.as_ref())).collect();

    let mut seen = HashSet::new();
    let ordered: Vec<&str> = per_file
        .iter()
        .flatten()
        .map(String::as_str)
        .filter(|t| seen.insert(*t))
        .collect();

    let common: Vec<&str> = match rule {
        CommonTokenRule::Intersection => {
            let sets: Vec<HashSet<&str>> = per_file
                .iter()
                .map(|tokens| tokens.iter().map(String::as_str).collect())
                .collect();
            ordered
                .into_iter()
                .filter(|t| sets.iter().all(|set| set.contains(t)))
                .collect()
        }
        CommonTokenRule::OccurrenceCount => {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for t in per_file.iter().flatten() {
                *counts.entry(t.as_str()).or_default() += 1;
            }
            ordered
                .into_iter()
                .filter(|t| counts.get(t).copied() == Some(paths.len()))
                .collect()
        }
    };

    common.into_iter().map(str::to_string).collect()
}

/// Bare file name (no directory, no conflict resolution) for merging `paths`.
pub fn merge_file_name<P: AsRef<Path>>(paths: &[P], rule: CommonTokenRule) -> String {
    if paths.is_empty() {
        return DEFAULT_MERGED_NAME.to_string();
    }
    let common = common_tokens(paths, rule);
    if common.is_empty() {
        DEFAULT_MERGED_NAME.to_string()
    } else {
        let take = common.len().min(MAX_COMMON_TOKENS);
        format!("{}{}", common[..take].join("_"), MERGED_SUFFIX)
    }
}

/// Conflict-free output path in `directory` for merging `paths`.
///
/// `["Report_Final.pdf", "report_draft.pdf"]` → `directory/report_merged.pdf`
/// (or `report_merged (1).pdf` if that is taken).
pub fn generate_merge_name<P: AsRef<Path>>(paths: &[P], directory: &Path) -> PathBuf {
    generate_merge_name_with(&FsExistence, paths, directory, CommonTokenRule::default())
}

/// [`generate_merge_name`] with an explicit existence oracle and rule.
pub fn generate_merge_name_with<E, P>(
    existence: &E,
    paths: &[P],
    directory: &Path,
    rule: CommonTokenRule,
) -> PathBuf
where
    E: Existence + ?Sized,
    P: AsRef<Path>,
{
    let name = merge_file_name(paths, rule);
    resolve_conflict_with(existence, &directory.join(name))
}
