//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the hook needs from external systems.
//! The `verstamp-adapters` crate provides implementations.

use std::path::Path;

use crate::error::StampResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `verstamp_adapters::filesystem::LocalFilesystem` (production)
/// - `verstamp_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> StampResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> StampResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_file(&self, path: &Path) -> StampResult<String>;

    /// Check whether `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Port for the project metadata collaborator.
///
/// The version is already resolved; computing it is not this crate's job.
///
/// Implemented by:
/// - `verstamp_adapters::metadata::StaticVersion`
/// - `verstamp_adapters::pyproject::PyProject` (static `project.version`)
#[cfg_attr(test, mockall::automock)]
pub trait VersionSource: Send + Sync {
    fn version(&self) -> StampResult<String>;
}
