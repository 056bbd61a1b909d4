//! The validated build description.
//!
//! A [`BuildConfig`] only exists after every field of the build document
//! passed validation. Optional slots are already normalized: nothing past
//! this point ever sees the `NULL` sentinel.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::{CompilerFamily, HostPlatform, Language};

/// Extra compiler flags for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileFlags(Option<String>);

impl CompileFlags {
    /// No extra flags.
    pub fn none() -> Self {
        CompileFlags(None)
    }

    /// Flags passed through verbatim.
    pub fn new(flags: impl Into<String>) -> Self {
        CompileFlags(Some(flags.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Text appended after the output path: empty, or the flags behind a
    /// single space.
    pub fn as_suffix(&self) -> Cow<'_, str> {
        match &self.0 {
            Some(flags) => Cow::Owned(format!(" {}", flags)),
            None => Cow::Borrowed(""),
        }
    }
}

/// A pre-build script slot that is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryScript {
    /// Value as written in the build document.
    pub declared: String,
    /// Resolved script path inside the build-config directory.
    pub path: PathBuf,
}

/// A per-platform pair of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerPlatform<T> {
    pub windows: T,
    pub linux: T,
}

impl<T> PerPlatform<T> {
    pub fn new(windows: T, linux: T) -> Self {
        PerPlatform { windows, linux }
    }

    /// Value for the given host.
    pub fn get(&self, host: HostPlatform) -> &T {
        match host {
            HostPlatform::Windows => &self.windows,
            HostPlatform::Linux => &self.linux,
        }
    }
}

/// Canonical, validated representation of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub compiler: CompilerFamily,
    pub language: Language,
    /// Display-only name.
    pub build_name: String,
    /// Main source file, relative to the project root, inserted verbatim
    /// into the build command.
    pub main_file: String,
    pub flags: PerPlatform<CompileFlags>,
    pub auxiliary: PerPlatform<Option<AuxiliaryScript>>,
}

impl BuildConfig {
    /// Main file resolved against the project root.
    pub fn main_file_path(&self, root: &Path) -> PathBuf {
        root.join(&self.main_file)
    }
}
