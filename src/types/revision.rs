// ABOUTME: Validated revision label derived from `git describe`.
// ABOUTME: Trimmed, non-empty, whitespace-free, with dirty-tree detection.

use std::fmt;
use thiserror::Error;

/// Suffix `git describe --dirty` appends when the working tree has changes.
pub const DIRTY_SUFFIX: &str = "-dirty";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RevisionError {
    #[error("revision label cannot be empty")]
    Empty,

    #[error("revision label cannot contain whitespace: {0:?}")]
    ContainsWhitespace(String),
}

/// Human-readable label identifying the deployed source tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    /// Parse raw describe output, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, RevisionError> {
        let label = raw.trim();

        if label.is_empty() {
            return Err(RevisionError::Empty);
        }

        if label.chars().any(char::is_whitespace) {
            return Err(RevisionError::ContainsWhitespace(label.to_string()));
        }

        Ok(Self(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label carries the uncommitted-changes marker.
    pub fn is_dirty(&self) -> bool {
        self.0.ends_with(DIRTY_SUFFIX)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
