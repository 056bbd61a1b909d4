//! Test utilities and mocks for Ghost unit tests.
//!
//! [`MockExecutor`] stands in for the host shell: it records every command
//! line the pipeline tries to run and answers with scripted exit codes, so
//! tests can assert exactly which subprocesses would have been spawned.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost::test_support::{MockExecutor, MockProcessOutput};
//!
//! let mut exec = MockExecutor::new();
//! exec.expect("gcc main.c -o ghost-build-linux", MockProcessOutput::success());
//! ```

pub mod fixtures;

use std::path::Path;

use anyhow::{bail, Result};

use crate::util::shell::{ColorChoice, Shell, Verbosity};
use crate::util::{CommandRunner, ProcessStatus};

pub use fixtures::*;

/// A shell that prints nothing but errors.
pub fn quiet_shell() -> Shell {
    Shell::new(Verbosity::Quiet, ColorChoice::Never)
}

/// Mock process output for testing command execution.
///
/// Child output is inherited by the real runner, so only the exit status is
/// scripted.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
}

impl MockProcessOutput {
    /// Create a successful output.
    pub fn success() -> Self {
        MockProcessOutput { status: 0 }
    }

    /// Create a failure output with the given status code.
    pub fn failure(status: i32) -> Self {
        MockProcessOutput { status }
    }
}

impl Default for MockProcessOutput {
    fn default() -> Self {
        MockProcessOutput::success()
    }
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command starts with prefix.
    StartsWith(String),
    /// Match if command contains substring.
    Contains(String),
    /// Match any command.
    Any,
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
            CommandPattern::Contains(s) => cmd.contains(s),
            CommandPattern::Any => true,
        }
    }
}

/// Expectation for a command execution.
#[derive(Debug, Clone)]
pub struct CommandExpectation {
    /// Pattern to match against commands.
    pub pattern: CommandPattern,
    /// Output to return when matched.
    pub output: MockProcessOutput,
    /// Number of times this expectation can be used (None = unlimited).
    pub times: Option<usize>,
    /// Number of times this expectation has been used.
    pub used: usize,
}

impl CommandExpectation {
    /// Create a new expectation.
    pub fn new(pattern: CommandPattern, output: MockProcessOutput) -> Self {
        CommandExpectation {
            pattern,
            output,
            times: None,
            used: 0,
        }
    }

    /// Set the number of times this expectation can be used.
    pub fn times(mut self, n: usize) -> Self {
        self.times = Some(n);
        self
    }

    /// Check if this expectation can still be used.
    pub fn available(&self) -> bool {
        match self.times {
            Some(n) => self.used < n,
            None => true,
        }
    }
}

/// Mock command runner.
///
/// Commands matching no expectation fail to start unless a default output
/// is set.
#[derive(Debug, Default)]
pub struct MockExecutor {
    expectations: Vec<CommandExpectation>,
    calls: Vec<String>,
    default_output: Option<MockProcessOutput>,
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        MockExecutor::default()
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&mut self, cmd: &str, output: MockProcessOutput) -> &mut Self {
        self.expectations.push(CommandExpectation::new(
            CommandPattern::Exact(cmd.to_string()),
            output,
        ));
        self
    }

    /// Add an expectation for a command starting with a prefix.
    pub fn expect_prefix(&mut self, prefix: &str, output: MockProcessOutput) -> &mut Self {
        self.expectations.push(CommandExpectation::new(
            CommandPattern::StartsWith(prefix.to_string()),
            output,
        ));
        self
    }

    /// Add an expectation for a command containing a substring.
    pub fn expect_contains(&mut self, substring: &str, output: MockProcessOutput) -> &mut Self {
        self.expectations.push(CommandExpectation::new(
            CommandPattern::Contains(substring.to_string()),
            output,
        ));
        self
    }

    /// Add a custom expectation.
    pub fn expect_pattern(&mut self, expectation: CommandExpectation) -> &mut Self {
        self.expectations.push(expectation);
        self
    }

    /// Set a default output for commands that don't match any expectation.
    pub fn set_default(&mut self, output: MockProcessOutput) -> &mut Self {
        self.default_output = Some(output);
        self
    }

    /// Get all commands that were run.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Verify that all expectations with a specific count were satisfied.
    pub fn verify(&self) -> Result<()> {
        for (i, exp) in self.expectations.iter().enumerate() {
            if let Some(expected) = exp.times {
                if exp.used != expected {
                    bail!(
                        "expectation {} was used {} times, expected {}",
                        i,
                        exp.used,
                        expected
                    );
                }
            }
        }
        Ok(())
    }
}

impl CommandRunner for MockExecutor {
    fn run(&mut self, line: &str, _cwd: &Path) -> Result<ProcessStatus> {
        self.calls.push(line.to_string());

        for exp in &mut self.expectations {
            if exp.pattern.matches(line) && exp.available() {
                exp.used += 1;
                return Ok(ProcessStatus::from_code(exp.output.status));
            }
        }

        if let Some(ref default) = self.default_output {
            return Ok(ProcessStatus::from_code(default.status));
        }

        bail!("unexpected command: {}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_executor_matching() {
        let mut exec = MockExecutor::new();
        exec.expect("gcc main.c -o out", MockProcessOutput::success());
        exec.expect_contains("clang", MockProcessOutput::failure(1));

        let cwd = Path::new(".");
        assert!(exec.run("gcc main.c -o out", cwd).unwrap().success());
        assert_eq!(exec.run("clang++ a.cpp", cwd).unwrap().code, Some(1));
        assert!(exec.run("python3 x.py", cwd).is_err());

        assert_eq!(exec.calls().len(), 3);
    }

    #[test]
    fn test_mock_executor_times() {
        let mut exec = MockExecutor::new();
        exec.expect_pattern(
            CommandExpectation::new(CommandPattern::Any, MockProcessOutput::success()).times(1),
        );

        let cwd = Path::new(".");
        assert!(exec.run("anything", cwd).is_ok());
        exec.verify().unwrap();
        assert!(exec.run("anything", cwd).is_err());
    }
}
