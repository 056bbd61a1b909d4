//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ghost::core::HostPlatform;
use ghost::util::shell::ColorChoice;

/// Ghost - a minimal cross-platform C/C++ build orchestrator
#[derive(Parser)]
#[command(name = "ghost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto", value_parser = parse_color)]
    pub color: ColorChoice,

    /// Run as if started in <DIR>
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the build config, run the auxiliary script and compile (default)
    Build,

    /// Validate the build config and print the compiler command without running anything
    Check(CheckArgs),

    /// Create a template build config in ghost-build/
    Init,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Resolve for this host instead of the current one (windows, linux)
    #[arg(long, value_parser = parse_host)]
    pub host: Option<HostPlatform>,
}

fn parse_color(s: &str) -> Result<ColorChoice, String> {
    s.parse()
}

fn parse_host(s: &str) -> Result<HostPlatform, String> {
    s.parse()
}
