use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Build-root-relative path of a produced file, as reported to the build.
///
/// Invariant: forward slashes only, exactly one leading `/`, no `.` or empty
/// segments. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactPath {
    relative: String,
}

impl ArtifactPath {
    /// Normalize a configured path.
    ///
    /// Both `/` and `\` separate segments, whatever the host platform.
    pub fn try_new(path: &str) -> Result<Self, DomainError> {
        let unified = path.replace('\\', "/");

        if unified.starts_with('/') || Path::new(path).is_absolute() || has_drive_prefix(&unified)
        {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.to_string(),
            });
        }

        let relative = unified
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/");

        if relative.is_empty() {
            return Err(DomainError::MissingOption {
                option: "path",
                hook: crate::domain::options::HOOK_NAME,
            });
        }

        Ok(Self { relative })
    }

    /// The path without its leading slash, e.g. `bar/baz.py`.
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Resolve against the build root using native separators.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.relative
            .split('/')
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

impl fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.relative)
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
