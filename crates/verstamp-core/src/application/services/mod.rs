//! Application services - orchestrate use cases.
//!
//! The only use case is "stamp the version": validate options, generate
//! content, write it through the filesystem port.

pub mod version_hook;

pub use version_hook::VersionBuildHook;
