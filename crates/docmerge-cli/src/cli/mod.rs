//! CLI for the docmerge document merger.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docmerge_core::config::{self, DocmergeConfig};
use docmerge_core::naming::CommonTokenRule;
use docmerge_core::session::SessionStore;
use docmerge_core::workflow::DefaultWorkflow;
use std::path::{Path, PathBuf};

use commands::{
    run_cancel, run_files, run_keep, run_merge, run_name, run_purge, run_resolve, run_status,
    run_upload,
};

/// Top-level CLI for docmerge.
#[derive(Debug, Parser)]
#[command(name = "docmerge")]
#[command(about = "docmerge: collect PDF/Word uploads per user and merge them into one PDF", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a file to a user's pending uploads (Word files are converted to PDF).
    Upload {
        /// User identifier.
        user: i64,
        /// File to upload.
        path: PathBuf,
        /// Declared MIME type; without it the file extension decides.
        #[arg(long)]
        mime: Option<String>,
        /// Store under this name instead of the file's own name.
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },

    /// Merge a user's pending uploads into one PDF.
    Merge {
        /// User identifier.
        user: i64,
    },

    /// Hand a user's pending uploads back unmerged.
    Keep {
        /// User identifier.
        user: i64,
    },

    /// Delete a user's pending uploads.
    Cancel {
        /// User identifier.
        user: i64,
    },

    /// Show a user's upload transcript and pending files.
    Status {
        /// User identifier.
        user: i64,
    },

    /// List every file in the upload directory.
    Files,

    /// Delete every file in the upload directory (dry run without --yes).
    Purge {
        /// Actually delete.
        #[arg(long)]
        yes: bool,
    },

    /// Print the merged-file name that would be generated for the given inputs.
    Name {
        /// Input file paths, in merge order.
        paths: Vec<PathBuf>,
        /// Directory for the merged file (default: the upload directory).
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Count word occurrences instead of requiring the word in every file.
        #[arg(long)]
        count_occurrences: bool,
    },

    /// Print a path that does not collide with an existing file.
    Resolve {
        /// Wanted path.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Name {
                paths,
                dir,
                count_occurrences,
            } => {
                let dir = dir.unwrap_or_else(|| cfg.upload_dir.clone());
                let rule = if count_occurrences {
                    CommonTokenRule::OccurrenceCount
                } else {
                    cfg.naming.common_token_rule()
                };
                run_name(&paths, &dir, rule);
                Ok(())
            }
            CliCommand::Resolve { path } => {
                run_resolve(&path);
                Ok(())
            }
            CliCommand::Status { user } => {
                let session_path = cfg.session_path()?;
                let store = SessionStore::load(&session_path).with_context(|| {
                    format!("failed to load sessions from {}", session_path.display())
                })?;
                run_status(&store, user)
            }
            command => command.run_with_sessions(&cfg).await,
        }
    }

    /// Commands that read and update the per-user session file.
    async fn run_with_sessions(self, cfg: &DocmergeConfig) -> Result<()> {
        let workflow = DefaultWorkflow::from_config(cfg);
        let session_path = cfg.session_path()?;
        let mut store = SessionStore::load(&session_path)
            .with_context(|| format!("failed to load sessions from {}", session_path.display()))?;

        let result = match self {
            CliCommand::Upload {
                user,
                path,
                mime,
                name,
            } => {
                run_upload(
                    &workflow,
                    &mut store,
                    user,
                    &path,
                    name.as_deref(),
                    mime.as_deref(),
                )
                .await
            }
            CliCommand::Merge { user } => run_merge(&workflow, &mut store, user).await,
            CliCommand::Keep { user } => run_keep(&workflow, &mut store, user),
            CliCommand::Cancel { user } => run_cancel(&workflow, &mut store, user).await,
            CliCommand::Files => run_files(&workflow).await,
            CliCommand::Purge { yes } => run_purge(&workflow, &mut store, yes).await,
            CliCommand::Name { .. } | CliCommand::Resolve { .. } | CliCommand::Status { .. } => {
                Ok(())
            }
        };

        // Merge clears the session even when it fails; persist either way.
        store
            .save()
            .with_context(|| format!("failed to save sessions to {}", session_path.display()))?;
        result
    }
}

/// File name shown to the user for a stored path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests;
