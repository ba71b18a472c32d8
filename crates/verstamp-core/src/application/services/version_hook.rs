//! Version build hook - stamps the project version into a file.
//!
//! One invocation runs three steps and aborts on the first failure:
//! 1. Validate options and pick the generation strategy
//! 2. Generate content (reading the current file in pattern mode)
//! 3. Write the file and record it as a build artifact
//!
//! Nothing is written if generation fails, and the artifact is only recorded
//! after a successful write.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, VersionSource},
    domain::{
        ArtifactPath, BuildData, HOOK_NAME, HookConfig, HookContext, HookOptions, PatternOption,
    },
    error::StampResult,
};

/// The `version` build hook.
///
/// Constructed once per build invocation; read-only afterwards.
pub struct VersionBuildHook {
    root: PathBuf,
    options: HookOptions,
    context: HookContext,
    metadata: Box<dyn VersionSource>,
    filesystem: Box<dyn Filesystem>,
}

impl VersionBuildHook {
    /// Name the hook is registered under.
    pub const PLUGIN_NAME: &'static str = HOOK_NAME;

    /// Create a hook for the given build root and raw options.
    ///
    /// Options are not validated here; see [`HookOptions`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use verstamp_core::application::VersionBuildHook;
    /// use verstamp_core::domain::{BuildData, HookConfig};
    ///
    /// let hook = VersionBuildHook::new(
    ///     ".",
    ///     HookConfig::new().with("path", "src/pkg/_version.py"),
    ///     metadata,   // impl VersionSource
    ///     filesystem, // impl Filesystem
    /// );
    /// let mut build = BuildData::new();
    /// hook.initialize(&mut build)?;
    /// ```
    pub fn new(
        root: impl Into<PathBuf>,
        config: HookConfig,
        metadata: Box<dyn VersionSource>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            root: root.into(),
            options: HookOptions::new(config),
            context: HookContext::default(),
            metadata,
            filesystem,
        }
    }

    /// Attach the orchestrator's pass-through context.
    pub fn with_context(mut self, context: HookContext) -> Self {
        self.context = context;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn context(&self) -> &HookContext {
        &self.context
    }

    pub fn config_path(&self) -> StampResult<&str> {
        Ok(self.options.path()?)
    }

    pub fn config_template(&self) -> StampResult<&str> {
        Ok(self.options.template()?)
    }

    pub fn config_pattern(&self) -> StampResult<&PatternOption> {
        Ok(self.options.pattern()?)
    }

    /// Run the hook, appending the produced file to `build_data.artifacts`.
    #[instrument(
        skip_all,
        fields(
            root = %self.root.display(),
            target = %self.context.target_name
        )
    )]
    pub fn initialize(&self, build_data: &mut BuildData) -> StampResult<()> {
        // 1. Validate
        let artifact = ArtifactPath::try_new(self.options.path()?)?;
        let strategy = self.options.strategy()?;
        let version = self.metadata.version()?;
        let target = artifact.resolve(&self.root);

        // 2. Generate
        let existing = if strategy.reads_existing() && self.filesystem.is_file(&target) {
            Some(self.filesystem.read_file(&target)?)
        } else {
            None
        };
        if let Some(previous) = existing.as_deref().and_then(|c| strategy.current_version(c)) {
            debug!(previous, "existing version found");
        }
        let content = strategy.generate(&version, existing.as_deref(), artifact.relative())?;
        debug!(mode = strategy.mode(), bytes = content.len(), "content generated");

        // 3. Write
        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&target, &content)?;
        build_data.add_artifact(&artifact);

        info!(artifact = %artifact, version = %version, "version stamped");
        Ok(())
    }
}
