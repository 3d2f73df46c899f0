//! Errors raised at the library boundary.
//!
//! Transcript content never produces one of these: malformed lines are
//! reported inline in the rendered minutes. These cover the inputs that have
//! to exist before compilation can start.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrawlError {
    #[error("failed to read roster {path}: {source}")]
    RosterRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid roster {path}: {source}")]
    RosterParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("transcript not found: {0}")]
    TranscriptMissing(PathBuf),

    #[error("directory name does not contain a YYYY-MM-DD date: {0}")]
    NoDateInPath(PathBuf),

    #[error("invalid directive pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrawlError>;
