//! Core domain layer for verstamp.
//!
//! Pure logic: option validation, template rendering and pattern
//! substitution. All filesystem and metadata access goes through the ports
//! defined in the application layer.
//!
//! ## Rules
//!
//! - **No I/O**: content is generated from strings, never from paths
//! - **Lazy validation**: options are checked on first access, not on construction
//! - **Tagged strategies**: template vs. pattern mode is an enum chosen once

pub mod artifact;
pub mod build;
pub mod content;
pub mod error;
pub mod options;
pub mod pattern;
pub mod template;
pub mod value;

pub use artifact::ArtifactPath;
pub use build::{BuildData, HookContext};
pub use content::GenerationStrategy;
pub use error::{DomainError, ErrorCategory};
pub use options::{HOOK_NAME, HookOptions, PatternOption};
pub use pattern::{DEFAULT_PATTERN, VersionPattern};
pub use template::{DEFAULT_TEMPLATE, VersionTemplate};
pub use value::{ConfigValue, HookConfig};
