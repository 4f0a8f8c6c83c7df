//! Error handling module for mernkit
//!
//! Provides the error types recorded by each scaffolding step. Failures are
//! split by kind so the final summary can tell a missing tool apart from a
//! filesystem problem.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scaffolding operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Filesystem errors (directory creation, file writes)
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External tool could not be located on PATH
    #[error("Tool not found: {0} (is it installed and on PATH?)")]
    ToolMissing(String),

    /// External tool ran but did not succeed
    #[error("Command `{command}` failed: {reason}")]
    ToolFailed { command: String, reason: String },

    /// Manifest serialization errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Interactive prompt errors
    #[error("Prompt error: {0}")]
    Prompt(String),
}

/// Result type alias for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

impl ScaffoldError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a tool failure error
    pub fn tool_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ToolFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }

    /// True for failures of an external tool rather than of the filesystem
    pub fn is_tool_error(&self) -> bool {
        matches!(self, Self::ToolMissing(_) | Self::ToolFailed { .. })
    }
}
