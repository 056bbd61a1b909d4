//! Implementation of `ghost build` and `ghost check`.
//!
//! The pipeline is strictly sequential and stops at the first failure:
//!
//! load -> validate -> detect host -> resolve platform -> derive command
//! -> auxiliary script -> summary -> compiler

use std::path::Path;

use crate::builder::{host_from_os, BuildCommand, PlatformContext};
use crate::config::load_build_config;
use crate::core::{BuildConfig, HostPlatform};
use crate::error::GhostError;
use crate::util::process::find_executable;
use crate::util::shell::{Shell, Status};
use crate::util::{CommandRunner, ProjectContext};

use super::auxiliary::{run_auxiliary, AuxiliaryOutcome};
use super::report::BuildReport;

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Resolve for this host instead of detecting it
    pub host: Option<HostPlatform>,
}

/// A fully resolved build, ready to run.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub config: BuildConfig,
    pub platform: PlatformContext,
    pub command: BuildCommand,
}

impl BuildPlan {
    pub fn report(&self) -> BuildReport {
        BuildReport::new(&self.config, &self.platform)
    }
}

/// Result of a completed build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub plan: BuildPlan,
    pub auxiliary: AuxiliaryOutcome,
}

/// Load, validate and resolve the project without running anything.
pub fn plan(
    ctx: &ProjectContext,
    opts: &BuildOptions,
    shell: &Shell,
) -> Result<BuildPlan, GhostError> {
    plan_on(ctx, opts, std::env::consts::OS, shell)
}

/// Like [`plan`], for the OS identifier `os` instead of the running one.
///
/// The host is only looked at once the config is valid, so config errors
/// are reported the same way everywhere.
pub fn plan_on(
    ctx: &ProjectContext,
    opts: &BuildOptions,
    os: &str,
    shell: &Shell,
) -> Result<BuildPlan, GhostError> {
    shell.status(Status::Parsing, "build config");
    let config = load_build_config(ctx)?;

    let host = match opts.host {
        Some(host) => host,
        None => host_from_os(os)?,
    };
    tracing::debug!("host platform: {}", host);

    let platform = PlatformContext::resolve(&config, host);
    if platform.is_fallback() {
        shell.status(
            Status::Fallback,
            format!(
                "{} does not support {}, switching to {}",
                host, platform.requested, platform.effective
            ),
        );
    }

    let command = BuildCommand::new(&config, &platform);
    tracing::debug!("build command: {}", command);

    Ok(BuildPlan {
        config,
        platform,
        command,
    })
}

/// Run the whole pipeline: plan, auxiliary script, compiler.
pub fn build(
    ctx: &ProjectContext,
    opts: &BuildOptions,
    runner: &mut dyn CommandRunner,
    shell: &Shell,
) -> Result<BuildResult, GhostError> {
    let plan = plan(ctx, opts, shell)?;

    let interpreter = ctx.settings().interpreter(plan.platform.host).to_string();
    let auxiliary = run_auxiliary(&plan.platform, &interpreter, ctx.root(), runner, shell)?;

    shell.block(Status::Info, plan.report());

    if find_executable(plan.command.compiler()).is_none() {
        shell.warn(format!("`{}` was not found in PATH", plan.command.compiler()));
    }

    execute(&plan.command, ctx.root(), runner, shell)?;

    Ok(BuildResult { plan, auxiliary })
}

/// Invoke the compiler.
pub fn execute(
    command: &BuildCommand,
    root: &Path,
    runner: &mut dyn CommandRunner,
    shell: &Shell,
) -> Result<(), GhostError> {
    let line = command.to_shell_line();
    shell.status(Status::Building, &line);

    let status = runner.run(&line, root).map_err(|e| {
        tracing::debug!("failed to start compiler: {:#}", e);
        GhostError::BuildCommandFailure {
            command: line.clone(),
            status: None,
        }
    })?;

    if !status.success() {
        return Err(GhostError::BuildCommandFailure {
            command: line,
            status: status.code,
        });
    }

    shell.status(Status::Finished, format!("`{}`", command.output()));
    Ok(())
}
