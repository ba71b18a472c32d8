//! Application layer for verstamp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`VersionBuildHook`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer but contains no option
//! or content rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::VersionBuildHook;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, VersionSource};

pub use error::ApplicationError;
