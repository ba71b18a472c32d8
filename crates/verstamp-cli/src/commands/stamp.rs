//! Run the `version` hook once and report its artifacts.
//!
//! Responsibility: pick the version source, hand the resolved options to the
//! core hook, and display results. No hook logic lives here.

use tracing::{info, instrument};

use verstamp_adapters::{LocalFilesystem, StaticVersion};
use verstamp_core::{
    application::{VersionBuildHook, ports::VersionSource},
    domain::{BuildData, HookContext},
};

use crate::{
    cli::{OutputFormat, StampArgs},
    config::StampConfig,
    error::CliResult,
    output::OutputManager,
};

/// Default build output directory, relative to the root.
const DIST_DIR: &str = "dist";

#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(args: StampArgs, config: StampConfig, output: OutputManager) -> CliResult<()> {
    // 1. Version: the flag wins over the project file.
    let metadata: Box<dyn VersionSource> = match (&args.project_version, config.project) {
        (Some(version), _) => Box::new(StaticVersion::new(version.as_str())),
        (None, project) => Box::new(project.unwrap_or_default()),
    };

    // 2. Run the hook.
    let context = HookContext::new(args.target.unwrap_or_default(), args.root.join(DIST_DIR));
    let hook = VersionBuildHook::new(
        &args.root,
        config.hook,
        metadata,
        Box::new(LocalFilesystem::new()),
    )
    .with_context(context);

    let mut build = BuildData::new();
    hook.initialize(&mut build)?;
    info!(artifacts = build.artifacts.len(), "Hook finished");

    // 3. Report.
    report(&build, &output)
}

fn report(build: &BuildData, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => output.json(build)?,
        OutputFormat::Plain => {
            for artifact in &build.artifacts {
                output.print(artifact)?;
            }
        }
        OutputFormat::Human | OutputFormat::Auto => {
            for artifact in &build.artifacts {
                output.success(&format!("Stamped {artifact}"))?;
            }
        }
    }
    Ok(())
}
