//! `ghost build` command

use ghost::error::GhostError;
use ghost::ops::{build, BuildOptions};
use ghost::util::{ProjectContext, Shell, SystemRunner};

pub fn execute(ctx: &ProjectContext, shell: &Shell) -> Result<(), GhostError> {
    let mut runner = SystemRunner::native();
    build(ctx, &BuildOptions::default(), &mut runner, shell)?;

    Ok(())
}
