//! `ghost init` command

use ghost::error::GhostError;
use ghost::ops::init_project;
use ghost::util::shell::Status;
use ghost::util::{ProjectContext, Shell};

pub fn execute(ctx: &ProjectContext, shell: &Shell) -> Result<(), GhostError> {
    let path = init_project(ctx)?;

    shell.status(Status::Created, path.display());
    shell.note("set the `Compiler` attribute before building");

    Ok(())
}
