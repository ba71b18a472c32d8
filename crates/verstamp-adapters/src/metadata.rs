//! Version sources backed by values the caller already resolved.

use verstamp_core::{
    application::{ApplicationError, ports::VersionSource},
    error::StampResult,
};

/// A version handed in by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticVersion(String);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl VersionSource for StaticVersion {
    fn version(&self) -> StampResult<String> {
        let version = self.0.trim();
        if version.is_empty() {
            return Err(ApplicationError::MetadataUnavailable {
                reason: "the resolved version is empty".into(),
            }
            .into());
        }
        Ok(version.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_trimmed_version() {
        assert_eq!(StaticVersion::new(" 1.2.3\n").version().unwrap(), "1.2.3");
    }

    #[test]
    fn empty_version_is_unavailable() {
        assert!(StaticVersion::new("").version().is_err());
    }
}
