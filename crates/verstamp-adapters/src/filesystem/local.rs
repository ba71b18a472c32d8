//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use verstamp_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StampError, StampResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StampResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StampResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> StampResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> StampError {
    ApplicationError::filesystem(path, operation, e).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("v.py");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "x = 1\n").unwrap();
        assert!(fs.is_file(&file));
        assert_eq!(fs.read_file(&file).unwrap(), "x = 1\n");
        assert!(!fs.is_file(tmp.path()));
    }

    #[test]
    fn read_missing_keeps_io_kind() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&tmp.path().join("missing.py"))
            .unwrap_err();

        match err {
            StampError::Application(app) => {
                assert_eq!(app.io_kind(), Some(io::ErrorKind::NotFound));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
