//! Infrastructure adapters for verstamp.
//!
//! This crate implements the ports defined in `verstamp-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod metadata;
pub mod pyproject;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use metadata::StaticVersion;
pub use pyproject::{PyProject, PyProjectError};
