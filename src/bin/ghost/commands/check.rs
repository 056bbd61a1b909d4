//! `ghost check` command

use ghost::error::GhostError;
use ghost::ops::{plan, BuildOptions};
use ghost::util::shell::Status;
use ghost::util::{ProjectContext, Shell};

use crate::cli::CheckArgs;

pub fn execute(ctx: &ProjectContext, args: CheckArgs, shell: &Shell) -> Result<(), GhostError> {
    let opts = BuildOptions { host: args.host };
    let plan = plan(ctx, &opts, shell)?;

    shell.block(Status::Info, plan.report());

    // The command goes to stdout so it can be piped
    println!("{}", plan.command);

    Ok(())
}
