//! Subprocess execution utilities.
//!
//! Ghost only ever runs whole command lines through the host shell. Commands
//! and paths from the build document are inserted verbatim, so the build
//! document is trusted input: it is not sanitized against shell injection.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::core::HostPlatform;

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    /// Passed after `args` without any quoting on Windows.
    raw_args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            raw_args: Vec::new(),
            cwd: None,
        }
    }

    /// Create a builder that hands `line` to the host shell.
    ///
    /// Windows uses `cmd /C`, Linux uses `sh -c`. cmd.exe does its own
    /// parsing of the line, so it must not be quoted a second time.
    pub fn shell(host: HostPlatform, line: &str) -> Self {
        match host {
            HostPlatform::Windows => ProcessBuilder::new("cmd").arg("/C").raw_arg(line),
            HostPlatform::Linux => ProcessBuilder::new("sh").args(["-c", line]),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Add an argument that reaches the program exactly as given.
    ///
    /// Same as [`arg`](Self::arg) outside Windows.
    pub fn raw_arg(mut self, arg: impl Into<String>) -> Self {
        self.raw_args.push(arg.into());
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Get the unquoted arguments.
    pub fn get_raw_args(&self) -> &[String] {
        &self.raw_args
    }

    /// Build the Command.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        for raw in &self.raw_args {
            #[cfg(windows)]
            {
                use std::os::windows::process::CommandExt;
                cmd.raw_arg(raw);
            }
            #[cfg(not(windows))]
            cmd.arg(raw);
        }

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Execute with inherited stdio and return the exit status.
    pub fn status(&self) -> Result<ExitStatus> {
        let mut cmd = self.build_command();
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .with_context(|| format!("failed to execute `{}`", self.display_command()))?;
        Ok(status)
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.extend(self.raw_args.iter().cloned());
        parts.join(" ")
    }
}

/// Outcome of a finished subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessStatus {
    pub fn from_code(code: i32) -> Self {
        ProcessStatus { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessStatus {
    fn from(status: ExitStatus) -> Self {
        ProcessStatus {
            code: status.code(),
        }
    }
}

/// Runs shell command lines on behalf of the build pipeline.
///
/// Every subprocess Ghost spawns goes through this seam.
pub trait CommandRunner {
    /// Run `line` through the host shell in `cwd`, blocking until it exits.
    ///
    /// `Err` means the process could not be started at all.
    fn run(&mut self, line: &str, cwd: &Path) -> Result<ProcessStatus>;
}

/// Runner that spawns real processes through the host shell.
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner {
    host: HostPlatform,
}

impl SystemRunner {
    pub fn new(host: HostPlatform) -> Self {
        SystemRunner { host }
    }

    /// Runner using the shell of the OS this binary was built for.
    ///
    /// Anything but Windows gets `sh -c`; unsupported hosts are rejected by
    /// the pipeline before anything is spawned.
    pub fn native() -> Self {
        if cfg!(windows) {
            SystemRunner::new(HostPlatform::Windows)
        } else {
            SystemRunner::new(HostPlatform::Linux)
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, line: &str, cwd: &Path) -> Result<ProcessStatus> {
        let builder = ProcessBuilder::shell(self.host, line).cwd(cwd);
        tracing::debug!("spawning `{}`", builder.display_command());
        builder.status().map(ProcessStatus::from)
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}
