//! High-level operations.
//!
//! This module contains the implementation of Ghost commands.

pub mod auxiliary;
pub mod ghost_build;
pub mod ghost_init;
pub mod report;

pub use auxiliary::{run_auxiliary, AuxiliaryOutcome};
pub use ghost_build::{build, execute, plan, plan_on, BuildOptions, BuildPlan, BuildResult};
pub use ghost_init::init_project;
pub use report::BuildReport;
