//! `pyproject.toml` loader.
//!
//! Reads the `version` hook's options and, when it is static, the project
//! version. Nothing here computes a version.
//!
//! # Tables read
//!
//! ```toml
//! [project]
//! name    = "foo"
//! version = "1.2.3"                     # optional, unless no version is passed
//!
//! [tool.hatch.build.hooks.version]
//! path     = "src/foo/_version.py"
//! pattern  = true                       # or a regex string
//! template = "VERSION = {version!r}\n"  # optional
//!
//! # Per-target overrides, applied key by key
//! [tool.hatch.build.targets.wheel.hooks.version]
//! path = "src/foo/_wheel_version.py"
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use verstamp_core::{
    application::{ApplicationError, ports::VersionSource},
    domain::{HOOK_NAME, HookConfig},
    error::StampResult,
};

/// Failure to read or parse a `pyproject.toml`.
#[derive(Debug, Error)]
pub enum PyProjectError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl PyProjectError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised subset of a `pyproject.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PyProject {
    #[serde(default)]
    project: ProjectSection,
    #[serde(default)]
    tool: ToolSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProjectSection {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    dynamic: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ToolSection {
    #[serde(default)]
    hatch: HatchSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HatchSection {
    #[serde(default)]
    build: BuildSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BuildSection {
    #[serde(default)]
    hooks: BTreeMap<String, HookConfig>,
    #[serde(default)]
    targets: BTreeMap<String, TargetSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TargetSection {
    #[serde(default)]
    hooks: BTreeMap<String, HookConfig>,
}

impl PyProject {
    /// Read and parse the file at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, PyProjectError> {
        let content = fs::read_to_string(path).map_err(|source| PyProjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let project = content.parse::<Self>().map_err(|source| PyProjectError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            name = project.name().unwrap_or("<unnamed>"),
            "pyproject loaded"
        );
        Ok(project)
    }

    pub fn name(&self) -> Option<&str> {
        self.project.name.as_deref()
    }

    /// `project.version`, unless it is declared dynamic.
    pub fn static_version(&self) -> Option<&str> {
        if self.is_version_dynamic() {
            return None;
        }
        self.project.version.as_deref()
    }

    pub fn is_version_dynamic(&self) -> bool {
        self.project.dynamic.iter().any(|field| field == "version")
    }

    /// Options of the `version` hook, with the target's table laid over the
    /// global one when `target` is given. Missing tables yield no options.
    pub fn hook_config(&self, target: Option<&str>) -> HookConfig {
        let build = &self.tool.hatch.build;
        let mut config = build.hooks.get(HOOK_NAME).cloned().unwrap_or_default();

        if let Some(overrides) = target
            .and_then(|name| build.targets.get(name))
            .and_then(|section| section.hooks.get(HOOK_NAME))
        {
            config.merge(overrides.clone());
        }

        config
    }
}

impl FromStr for PyProject {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl VersionSource for PyProject {
    fn version(&self) -> StampResult<String> {
        if self.is_version_dynamic() {
            return Err(ApplicationError::MetadataUnavailable {
                reason: "`version` is listed in project.dynamic; pass the resolved version".into(),
            }
            .into());
        }

        self.project.version.clone().ok_or_else(|| {
            ApplicationError::MetadataUnavailable {
                reason: "no `version` in the [project] table".into(),
            }
            .into()
        })
    }
}
