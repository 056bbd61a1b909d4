//! Ghost CLI - a minimal cross-platform C/C++ build orchestrator

use anyhow::Result;
use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use ghost::error::GhostError;
use ghost::util::{ProjectContext, Shell};

/// Exit code for failures outside the build pipeline.
const UNEXPECTED_FAILURE: i32 = 22;

fn main() {
    let cli = Cli::parse();

    let shell = Shell::from_flags(cli.quiet, cli.verbose, cli.color);

    // Set up logging
    let filter = if shell.is_quiet() {
        EnvFilter::new("ghost=warn")
    } else if shell.is_verbose() {
        EnvFilter::new("ghost=debug")
    } else {
        EnvFilter::new("ghost=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(shell.use_color())
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli, &shell) {
        Ok(()) => 0,
        Err(e) => report(&shell, &e),
    };

    std::process::exit(code);
}

fn run(cli: Cli, shell: &Shell) -> Result<()> {
    let ctx = match cli.directory {
        Some(dir) => ProjectContext::with_root(dir),
        None => ProjectContext::new()?,
    };

    // Execute command
    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => commands::build::execute(&ctx, shell)?,
        Commands::Check(args) => commands::check::execute(&ctx, args, shell)?,
        Commands::Init => commands::init::execute(&ctx, shell)?,
    }

    Ok(())
}

/// Print the single diagnostic line for a failure and pick the exit code.
fn report(shell: &Shell, err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<GhostError>() {
        Some(ghost_err) => {
            shell.error(ghost_err.report_line());
            if shell.is_verbose() {
                if let Some(help) = ghost_err.help() {
                    shell.note(help);
                }
            }
            ghost_err.exit_code()
        }
        None => {
            shell.error(format!("{:#}", err));
            UNEXPECTED_FAILURE
        }
    }
}
