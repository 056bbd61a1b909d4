//! Derivation of the compiler invocation.

use std::fmt;

use crate::core::{BuildConfig, CompileFlags};

use super::platform::PlatformContext;

/// The single compiler invocation for a build.
///
/// Rendered as `<compiler> <main file> -o <output><flags>`. Nothing is quoted
/// or escaped: paths and flags from the build document reach the host shell
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    compiler: &'static str,
    main_file: String,
    output: &'static str,
    flags: CompileFlags,
}

impl BuildCommand {
    /// Combine a validated config with its platform view.
    pub fn new(config: &BuildConfig, platform: &PlatformContext) -> Self {
        BuildCommand {
            compiler: platform.compiler,
            main_file: config.main_file.clone(),
            output: platform.host.output_name(),
            flags: platform.flags.clone(),
        }
    }

    pub fn compiler(&self) -> &str {
        self.compiler
    }

    /// Name of the produced executable.
    pub fn output(&self) -> &str {
        self.output
    }

    /// The full shell line.
    pub fn to_shell_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -o {}{}",
            self.compiler,
            self.main_file,
            self.output,
            self.flags.as_suffix()
        )
    }
}
