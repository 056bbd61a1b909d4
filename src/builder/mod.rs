//! Turning a validated config into something runnable.
//!
//! This module resolves the host-specific view of a build and derives the
//! compiler invocation from it.

pub mod command;
pub mod platform;

pub use command::BuildCommand;
pub use platform::{effective_family, host_from_os, PlatformContext};
