//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No hook logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "verstamp",
    bin_name = "verstamp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Stamp a resolved project version into a source file",
    long_about = "verstamp runs the `version` build hook once: it reads the hook \
                  options from pyproject.toml, writes or updates the version file, \
                  and prints the artifact it produced.",
    after_help = "EXAMPLES:\n\
        \x20 verstamp --project-version 1.2.3\n\
        \x20 verstamp --root pkg --target wheel\n\
        \x20 verstamp --path src/foo/_version.py --default-pattern --project-version 2.0.0\n\
        \x20 verstamp --output-format json",
)]
pub struct Cli {
    /// Flags shared with every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to stamp and where.
    #[command(flatten)]
    pub stamp: StampArgs,
}

// ── stamp ─────────────────────────────────────────────────────────────────────

/// Arguments controlling a single hook run.
#[derive(Debug, Args)]
pub struct StampArgs {
    /// Build root; the hook's `path` is relative to it.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub root: PathBuf,

    /// Build target whose hook table overrides the global one.
    #[arg(
        short = 't',
        long = "target",
        value_name = "NAME",
        help = "Build target name (e.g. wheel, sdist)"
    )]
    pub target: Option<String>,

    /// Already-resolved version to stamp.
    #[arg(
        long = "project-version",
        value_name = "VERSION",
        help = "Version to stamp (default: static project.version)"
    )]
    pub project_version: Option<String>,

    /// Override the hook's `path` option.
    #[arg(long = "path", value_name = "FILE", help = "Target file, relative to the root")]
    pub path: Option<String>,

    /// Override the hook's `template` option.
    #[arg(
        long = "template",
        value_name = "TEMPLATE",
        conflicts_with_all = ["pattern", "default_pattern"],
        help = "Template with a {version} or {version!r} placeholder"
    )]
    pub template: Option<String>,

    /// Override the hook's `pattern` option with a regex.
    #[arg(
        long = "pattern",
        value_name = "REGEX",
        conflicts_with = "default_pattern",
        help = "Regex with one capture group around the version"
    )]
    pub pattern: Option<String>,

    /// Set the hook's `pattern` option to `true`.
    #[arg(
        long = "default-pattern",
        help = "Rewrite an existing __version__ assignment in place"
    )]
    pub default_pattern: bool,
}
