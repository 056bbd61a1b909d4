//! Shared utilities

pub mod config;
pub mod context;
pub mod process;
pub mod shell;

pub use config::Settings;
pub use context::ProjectContext;
pub use process::{CommandRunner, ProcessStatus, SystemRunner};
pub use shell::Shell;
