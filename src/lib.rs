//! Ghost - a minimal cross-platform C/C++ build orchestrator
//!
//! Ghost reads a declarative build document (`ghost-build/ghost-build.xml`),
//! validates it, derives a single compiler invocation for the host, runs an
//! optional pre-build script and then the compiler.
//!
//! Every failure is a [`GhostError`] with a stable exit code; the pipeline
//! stops at the first one.

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod ops;
pub mod util;

/// Test utilities and mocks for Ghost unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock command runner and on-disk project
/// fixtures.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuildCommand, PlatformContext};
pub use core::{BuildConfig, CompilerFamily, HostPlatform, Language};
pub use error::GhostError;
pub use util::context::ProjectContext;
