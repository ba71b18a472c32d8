// ============================================================================
// domain/error.rs - HOOK OPTION AND CONTENT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the cached options can hand them out repeatedly)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Option `{option}` for build hook `{hook}` is required")]
    MissingOption {
        option: &'static str,
        hook: &'static str,
    },

    #[error("Option `{option}` for build hook `{hook}` must be {expected}")]
    InvalidOptionType {
        option: &'static str,
        hook: &'static str,
        expected: &'static str,
    },

    #[error("invalid version pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid version template: {reason}")]
    InvalidTemplate { reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Content Errors
    // ========================================================================
    #[error("pattern `{pattern}` must define exactly one capture group, found {found}")]
    PatternGroupCount { pattern: String, found: usize },

    #[error("unable to parse the version from the file: {path}")]
    PatternNoMatch { path: String },

    #[error("file does not exist: {path}")]
    SourceFileMissing { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingOption { option, hook } => vec![
                format!("Set `{option}` in the `{hook}` build hook table"),
                "Example: path = \"src/pkg/_version.py\"".into(),
            ],
            Self::InvalidOptionType { option, .. } => vec![
                format!("Quote the value of `{option}` so it is read as a string"),
            ],
            Self::InvalidPattern { .. } => vec![
                "Check the regular expression syntax".into(),
                "Example: pattern = 'v = \"(?P<version>.+)\"'".into(),
            ],
            Self::InvalidTemplate { .. } => vec![
                "Use `{version}` or `{version!r}` as the only placeholder".into(),
                "Write literal braces as `{{` and `}}`".into(),
            ],
            Self::PatternGroupCount { .. } => vec![
                "Capture the version with a single group, e.g. `(?P<version>.+)`".into(),
                "Use `(?:...)` for any other grouping".into(),
            ],
            Self::PatternNoMatch { path } => vec![
                format!("Make sure {path} contains a version assignment"),
                "Or set `pattern` to a regex that matches the file".into(),
            ],
            Self::SourceFileMissing { path } => vec![
                format!("Create {path} before building"),
                "Or drop `pattern` to generate the file from a template".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Use a path relative to the project root".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingOption { .. }
            | Self::InvalidOptionType { .. }
            | Self::InvalidPattern { .. }
            | Self::InvalidTemplate { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Configuration,
            Self::PatternGroupCount { .. } | Self::PatternNoMatch { .. } => {
                ErrorCategory::Content
            }
            Self::SourceFileMissing { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Content,
    NotFound,
}
