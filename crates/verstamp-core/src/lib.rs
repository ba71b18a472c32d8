//! verstamp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of the `version`
//! build hook: it stamps an already-resolved project version into a source
//! file and reports that file as a build artifact.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Orchestrator (build backend / CLI)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls initialize()
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Services             │
//! │          (VersionBuildHook)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, VersionSource)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     verstamp-adapters (Infrastructure)  │
//! │ (LocalFilesystem, StaticVersion, etc.)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (HookOptions, VersionTemplate, Pattern) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use verstamp_core::prelude::*;
//!
//! let hook = VersionBuildHook::new(root, config, metadata, filesystem);
//! let mut build = BuildData::new();
//! hook.initialize(&mut build)?;
//! assert_eq!(build.artifacts, ["/src/pkg/_version.py"]);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        VersionBuildHook,
        ports::{Filesystem, VersionSource},
    };
    pub use crate::domain::{
        ArtifactPath, BuildData, ConfigValue, GenerationStrategy, HookConfig, HookContext,
        HookOptions, PatternOption,
    };
    pub use crate::error::{StampError, StampResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
