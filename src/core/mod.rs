//! Core data structures for Ghost.
//!
//! - Language variants and compiler families
//! - Host platforms
//! - The validated build configuration

pub mod build_config;
pub mod language;
pub mod platform;

pub use build_config::{AuxiliaryScript, BuildConfig, CompileFlags, PerPlatform};
pub use language::{CompilerFamily, Language};
pub use platform::HostPlatform;
