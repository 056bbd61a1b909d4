//! Error types for the Ghost build pipeline.
//!
//! Every failure has a stable exit code. Library code returns [`GhostError`]
//! and only the binary turns it into a process exit status.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::core::HostPlatform;

/// Required child elements of `<GhostBuild>`, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredElement {
    BuildName,
    MainFile,
    WindowsFlags,
    LinuxFlags,
    WindowsAuxiliary,
    LinuxAuxiliary,
}

impl RequiredElement {
    /// All elements in the order they are checked.
    pub const ALL: [RequiredElement; 6] = [
        RequiredElement::BuildName,
        RequiredElement::MainFile,
        RequiredElement::WindowsFlags,
        RequiredElement::LinuxFlags,
        RequiredElement::WindowsAuxiliary,
        RequiredElement::LinuxAuxiliary,
    ];

    /// XML tag name of the element.
    pub fn tag(&self) -> &'static str {
        match self {
            RequiredElement::BuildName => "BuildName",
            RequiredElement::MainFile => "CMainFile",
            RequiredElement::WindowsFlags => "CFlagsWindows",
            RequiredElement::LinuxFlags => "CFlagsLinux",
            RequiredElement::WindowsAuxiliary => "WindowsAuxiliary",
            RequiredElement::LinuxAuxiliary => "LinuxAuxiliary",
        }
    }

    /// Whether the element must carry non-empty text.
    ///
    /// Flag and auxiliary slots may be empty, which means "unset".
    pub fn requires_text(&self) -> bool {
        matches!(self, RequiredElement::BuildName | RequiredElement::MainFile)
    }

    fn exit_code(&self) -> i32 {
        match self {
            RequiredElement::BuildName => 7,
            RequiredElement::MainFile => 8,
            RequiredElement::WindowsFlags => 9,
            RequiredElement::LinuxFlags => 10,
            RequiredElement::WindowsAuxiliary => 11,
            RequiredElement::LinuxAuxiliary => 12,
        }
    }
}

impl fmt::Display for RequiredElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Required attributes of `<GhostBuild>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredAttribute {
    Compiler,
    CType,
}

impl RequiredAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            RequiredAttribute::Compiler => "Compiler",
            RequiredAttribute::CType => "CType",
        }
    }

    pub fn expected(&self) -> &'static str {
        match self {
            RequiredAttribute::Compiler => "`GNU` or `Clang`",
            RequiredAttribute::CType => "`C` or `C++`",
        }
    }
}

impl fmt::Display for RequiredAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failure anywhere in the Ghost pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum GhostError {
    #[error("Can't find Ghost Build Config at {}", .path.display())]
    #[diagnostic(
        code(ghost::config::missing),
        help("Run `ghost init` to create a template build config")
    )]
    MissingConfig { path: PathBuf },

    #[error("Can't parse build config: {reason}")]
    #[diagnostic(code(ghost::config::malformed))]
    MalformedConfig { path: PathBuf, reason: String },

    #[error("Missing `{attribute}` attribute in <GhostBuild>")]
    #[diagnostic(code(ghost::config::missing_attribute))]
    MissingAttribute { attribute: RequiredAttribute },

    #[error("Invalid {attribute}: expected {}, found `{value}`", .attribute.expected())]
    #[diagnostic(code(ghost::config::invalid_attribute))]
    InvalidAttribute {
        attribute: RequiredAttribute,
        value: String,
    },

    #[error("Compiler is NULL. Please modify the config.")]
    #[diagnostic(
        code(ghost::config::compiler_unset),
        help("Set the `Compiler` attribute of <GhostBuild> to `GNU` or `Clang`")
    )]
    SentinelCompilerUnset,

    #[error("Missing `{element}` element in <GhostBuild>")]
    #[diagnostic(code(ghost::config::missing_element))]
    MissingElement { element: RequiredElement },

    #[error("CMainFile `{}` is non-existent", .path.display())]
    #[diagnostic(code(ghost::config::missing_main_file))]
    MissingMainFile { path: PathBuf },

    #[error("Unsupported host platform `{os}`: expected Windows or Linux")]
    #[diagnostic(code(ghost::build::unsupported_host))]
    UnsupportedHostPlatform { os: String },

    #[error("Invalid {platform} auxiliary file: {} does not exist", .path.display())]
    #[diagnostic(code(ghost::auxiliary::missing))]
    MissingAuxiliaryFile {
        platform: HostPlatform,
        path: PathBuf,
    },

    #[error("{platform} auxiliary file crash: can't proceed ({})", describe_status(.status))]
    #[diagnostic(code(ghost::auxiliary::failed))]
    AuxiliaryScriptFailure {
        platform: HostPlatform,
        status: Option<i32>,
    },

    #[error("Build failed ({})", describe_status(.status))]
    #[diagnostic(
        code(ghost::build::failed),
        help("The compiler output above describes the failure")
    )]
    BuildCommandFailure { command: String, status: Option<i32> },

    #[error("{} already exists", .path.display())]
    #[diagnostic(code(ghost::init::exists))]
    ProjectExists { path: PathBuf },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(ghost::init::io))]
    InitFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "process did not run to completion".to_string(),
    }
}

impl GhostError {
    /// Stable process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            GhostError::SentinelCompilerUnset => -1,
            GhostError::MissingConfig { .. } => 1,
            GhostError::MalformedConfig { .. } => 2,
            GhostError::MissingAttribute {
                attribute: RequiredAttribute::Compiler,
            } => 3,
            GhostError::InvalidAttribute {
                attribute: RequiredAttribute::Compiler,
                ..
            } => 4,
            GhostError::MissingAttribute {
                attribute: RequiredAttribute::CType,
            } => 5,
            GhostError::InvalidAttribute {
                attribute: RequiredAttribute::CType,
                ..
            } => 6,
            GhostError::MissingElement { element } => element.exit_code(),
            GhostError::MissingMainFile { .. } => 13,
            GhostError::UnsupportedHostPlatform { .. } => 14,
            GhostError::MissingAuxiliaryFile {
                platform: HostPlatform::Windows,
                ..
            } => 15,
            GhostError::AuxiliaryScriptFailure {
                platform: HostPlatform::Windows,
                ..
            } => 16,
            GhostError::MissingAuxiliaryFile {
                platform: HostPlatform::Linux,
                ..
            } => 17,
            GhostError::AuxiliaryScriptFailure {
                platform: HostPlatform::Linux,
                ..
            } => 18,
            GhostError::BuildCommandFailure { .. } => 19,
            GhostError::ProjectExists { .. } => 20,
            GhostError::InitFailed { .. } => 21,
        }
    }

    /// Phase tag printed in front of the diagnostic line.
    pub fn phase(&self) -> &'static str {
        match self {
            GhostError::MissingConfig { .. }
            | GhostError::MalformedConfig { .. }
            | GhostError::MissingAttribute { .. }
            | GhostError::InvalidAttribute { .. }
            | GhostError::SentinelCompilerUnset
            | GhostError::MissingElement { .. }
            | GhostError::MissingMainFile { .. } => "[CONFIG]",
            GhostError::UnsupportedHostPlatform { .. } | GhostError::BuildCommandFailure { .. } => {
                "[BUILD]"
            }
            GhostError::MissingAuxiliaryFile { .. } => "[CONFIG&BUILD]",
            GhostError::AuxiliaryScriptFailure { .. } => "[BUILD-AUXILIARY]",
            GhostError::ProjectExists { .. } | GhostError::InitFailed { .. } => "[INIT]",
        }
    }

    /// The single diagnostic line shown to the user.
    pub fn report_line(&self) -> String {
        format!("{} {} [{}]", self.phase(), self, self.exit_code())
    }
}
