//! Human-readable build summary.

use std::fmt;

use crate::builder::PlatformContext;
use crate::core::{
    AuxiliaryScript, BuildConfig, CompileFlags, CompilerFamily, HostPlatform, Language,
};

/// Summary printed before the compiler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub host: HostPlatform,
    pub requested: CompilerFamily,
    pub effective: CompilerFamily,
    pub fallback: bool,
    pub compiler: String,
    pub language: Language,
    pub build_name: String,
    pub main_file: String,
    pub windows_flags: Option<String>,
    pub linux_flags: Option<String>,
    pub windows_auxiliary: Option<String>,
    pub linux_auxiliary: Option<String>,
}

fn flags(flags: &CompileFlags) -> Option<String> {
    flags.as_str().map(str::to_string)
}

fn auxiliary(script: &Option<AuxiliaryScript>) -> Option<String> {
    script.as_ref().map(|s| s.declared.clone())
}

impl BuildReport {
    pub fn new(config: &BuildConfig, platform: &PlatformContext) -> Self {
        BuildReport {
            host: platform.host,
            requested: platform.requested,
            effective: platform.effective,
            fallback: platform.is_fallback(),
            compiler: platform.compiler.to_string(),
            language: config.language,
            build_name: config.build_name.clone(),
            main_file: config.main_file.clone(),
            windows_flags: flags(&config.flags.windows),
            linux_flags: flags(&config.flags.linux),
            windows_auxiliary: auxiliary(&config.auxiliary.windows),
            linux_auxiliary: auxiliary(&config.auxiliary.linux),
        }
    }

    /// The compiler line, e.g. `Clang? (Fallback to GNU) (g++)`.
    pub fn compiler_line(&self) -> String {
        if self.fallback {
            format!(
                "{}? (Fallback to {}) ({})",
                self.requested, self.effective, self.compiler
            )
        } else {
            format!("{} ({})", self.requested, self.compiler)
        }
    }
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Running Platform: {}", self.host)?;
        writeln!(f, "Compiler: {}", self.compiler_line())?;
        writeln!(f, "C Type: {}", self.language)?;
        writeln!(f, "Build name: {}", self.build_name)?;
        writeln!(f, "Main file: {}", self.main_file)?;
        writeln!(f, "Windows Flags: {}", or_none(&self.windows_flags))?;
        writeln!(f, "Linux Flags: {}", or_none(&self.linux_flags))?;
        writeln!(f, "Windows Auxiliary: {}", or_none(&self.windows_auxiliary))?;
        write!(f, "Linux Auxiliary: {}", or_none(&self.linux_auxiliary))
    }
}
