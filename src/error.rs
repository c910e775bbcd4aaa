// ABOUTME: Application-wide error types for sitepush.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::purge::PurgeError;
use crate::types::RevisionError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {}", exit_status(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("output directory not found: {0}")]
    OutputDirMissing(PathBuf),

    #[error("failed to walk output directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid revision: {0}")]
    InvalidRevision(#[from] RevisionError),

    #[error("site deployed but cache purge failed, cached pages may be stale: {0}")]
    Purge(#[from] PurgeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
