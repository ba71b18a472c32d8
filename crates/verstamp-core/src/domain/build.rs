use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::artifact::ArtifactPath;

/// Mutable build record owned by the orchestrator.
///
/// Hooks only ever append to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildData {
    #[serde(default)]
    pub artifacts: Vec<String>,
}

impl BuildData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_artifact(&mut self, path: &ArtifactPath) {
        self.artifacts.push(path.to_string());
    }
}

/// Orchestrator values the hook carries but does not act on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookContext {
    /// Name of the build target, e.g. `wheel`.
    pub target_name: String,
    /// Directory the build writes its output to.
    pub directory: PathBuf,
}

impl HookContext {
    pub fn new(target_name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            target_name: target_name.into(),
            directory: directory.into(),
        }
    }
}
