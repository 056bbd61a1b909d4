//! Running the host's pre-build script.

use std::path::Path;

use crate::builder::PlatformContext;
use crate::error::GhostError;
use crate::util::shell::{Shell, Status};
use crate::util::CommandRunner;

/// What happened to the auxiliary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxiliaryOutcome {
    /// The slot for this host is unset.
    Skipped,
    /// The script ran and exited successfully.
    Completed,
}

/// Run the auxiliary script for the resolved host, if one is set.
///
/// Only the host's own slot is ever considered. A missing script or a
/// non-zero exit stops the build.
pub fn run_auxiliary(
    platform: &PlatformContext,
    interpreter: &str,
    root: &Path,
    runner: &mut dyn CommandRunner,
    shell: &Shell,
) -> Result<AuxiliaryOutcome, GhostError> {
    let host = platform.host;

    let Some(script) = &platform.auxiliary else {
        shell.status(
            Status::Skipped,
            format!("{} auxiliary file is not specified", host),
        );
        return Ok(AuxiliaryOutcome::Skipped);
    };

    if !script.path.is_file() {
        return Err(GhostError::MissingAuxiliaryFile {
            platform: host,
            path: script.path.clone(),
        });
    }

    let relative = script.path.strip_prefix(root).unwrap_or(&script.path);
    let line = format!("{} {}", interpreter, relative.display());

    shell.status(Status::Running, format!("{} auxiliary file `{}`", host, script.declared));
    tracing::debug!("auxiliary command: {}", line);

    let status = runner.run(&line, root).map_err(|e| {
        tracing::debug!("failed to start auxiliary script: {:#}", e);
        GhostError::AuxiliaryScriptFailure {
            platform: host,
            status: None,
        }
    })?;

    if !status.success() {
        return Err(GhostError::AuxiliaryScriptFailure {
            platform: host,
            status: status.code,
        });
    }

    Ok(AuxiliaryOutcome::Completed)
}
