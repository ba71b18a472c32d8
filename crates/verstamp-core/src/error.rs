//! Unified error handling for verstamp core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

/// Root error type for verstamp core operations.
///
/// Display is transparent so the option diagnostics reach the user verbatim.
#[derive(Debug, Error, Clone)]
pub enum StampError {
    /// Option or content errors (bad configuration, pattern mismatch, ...).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, metadata).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl StampError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                domain::ErrorCategory::Content => ErrorCategory::Content,
                domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether the hook's options, rather than the environment, are at fault.
    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Content,
    NotFound,
    Io,
}

/// Convenient result type alias.
pub type StampResult<T> = Result<T, StampError>;
