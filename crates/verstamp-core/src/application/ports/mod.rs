//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `verstamp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the hook, implemented by infrastructure
//!   - `Filesystem`: File operations under the build root
//!   - `VersionSource`: The already-resolved project version
//!
//! - **Driving (Input) Ports**: The hook's own `initialize`, called by an
//!   orchestrator (a build backend, or the `verstamp` binary)

pub mod output;

pub use output::{Filesystem, VersionSource};
