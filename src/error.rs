//! Typed errors for the library surface.
//!
//! The binary and the launcher wrap these in `anyhow` with context.

use std::path::PathBuf;
use thiserror::Error;

/// Rejection of a mode name at the switch boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    /// The name is not one of the known writer modes.
    #[error("Invalid mode: {0}")]
    Unknown(String),
}

/// Failure while persisting the writer settings document.
///
/// Callers treat persistence as advisory and normally log and discard this.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The existing settings file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The settings directory or file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File or directory that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The settings document could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure while composing the system prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The prompt override is enabled but its file does not exist.
    #[error("missing system prompt file '{}'", path.display())]
    MissingSystemPrompt {
        /// Resolved override path.
        path: PathBuf,
    },
    /// The prompt override file exists but could not be read.
    #[error("failed to read system prompt file '{}': {source}", path.display())]
    Read {
        /// Resolved override path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The computed prompt could not be written out.
    #[error("failed to write system prompt file '{}': {source}", path.display())]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
