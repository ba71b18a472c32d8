//! Hook configuration for one run.
//!
//! [`StampConfig`] is loaded once at startup and passed down by value.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--path`, `--template`, `--pattern`, `--default-pattern`)
//! 2. `[tool.hatch.build.targets.<target>.hooks.version]`
//! 3. `[tool.hatch.build.hooks.version]`

use std::path::{Path, PathBuf};

use tracing::debug;

use verstamp_adapters::{PyProject, PyProjectError};
use verstamp_core::domain::{ConfigValue, HookConfig};

use crate::{
    cli::{GlobalArgs, StampArgs},
    error::{CliError, CliResult},
};

/// File name looked up under the root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pyproject.toml";

#[derive(Debug, Clone, Default)]
pub struct StampConfig {
    /// The parsed project file, if one was found.
    pub project: Option<PyProject>,
    /// Hook options after CLI overrides.
    pub hook: HookConfig,
}

impl StampConfig {
    /// Load the project file and layer the CLI overrides on top.
    ///
    /// A missing `<root>/pyproject.toml` is tolerated so the hook can be
    /// driven by flags alone; a missing file named by `--config` is not.
    pub fn load(global: &GlobalArgs, args: &StampArgs) -> CliResult<Self> {
        let (path, explicit) = match &global.config {
            Some(path) => (path.clone(), true),
            None => (args.root.join(DEFAULT_CONFIG_FILE), false),
        };

        let project = read_project(&path, explicit)?;
        let mut hook = project
            .as_ref()
            .map(|p| p.hook_config(args.target.as_deref()))
            .unwrap_or_default();
        hook.merge(overrides(args));

        debug!(
            config = %path.display(),
            found = project.is_some(),
            options = hook.len(),
            "Hook configuration resolved"
        );

        Ok(Self { project, hook })
    }
}

fn read_project(path: &Path, explicit: bool) -> CliResult<Option<PyProject>> {
    match PyProject::load(path) {
        Ok(project) => Ok(Some(project)),
        Err(e) if e.is_not_found() && !explicit => Ok(None),
        Err(e) if e.is_not_found() => Err(CliError::ConfigNotFound {
            path: PathBuf::from(path),
        }),
        Err(e) => Err(config_error(e)),
    }
}

fn config_error(err: PyProjectError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

/// Options given on the command line.
fn overrides(args: &StampArgs) -> HookConfig {
    let mut config = HookConfig::new();
    if let Some(path) = &args.path {
        config.insert("path", path.as_str());
    }
    if let Some(template) = &args.template {
        config.insert("template", template.as_str());
        // An explicit template selects template mode.
        config.insert("pattern", false);
    }
    if let Some(pattern) = &args.pattern {
        config.insert("pattern", pattern.as_str());
    } else if args.default_pattern {
        config.insert("pattern", true);
    }
    config
}
