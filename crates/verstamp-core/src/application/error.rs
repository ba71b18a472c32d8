//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not option
//! or content problems. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the hook against its ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. The original `io::Error` is kept as source.
    #[error("Failed to {operation} {path}: {source}")]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The metadata collaborator could not supply a version.
    #[error("Project version unavailable: {reason}")]
    MetadataUnavailable { reason: String },
}

impl ApplicationError {
    pub fn filesystem(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            path: path.into(),
            operation,
            source: Arc::new(source),
        }
    }

    /// Kind of the underlying I/O failure, if any.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Filesystem { source, .. } => Some(source.kind()),
            Self::MetadataUnavailable { .. } => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::MetadataUnavailable { .. } => vec![
                "Set a static `version` in the [project] table".into(),
                "Or pass the resolved version explicitly".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Io,
            Self::MetadataUnavailable { .. } => ErrorCategory::Configuration,
        }
    }
}
