//! Project context for Ghost operations.
//!
//! Provides centralized access to the project root and the well-known paths
//! below it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::Settings;

/// Directory holding the build document, auxiliary scripts and settings.
pub const CONFIG_DIR: &str = "ghost-build";

/// File name of the build document.
pub const CONFIG_FILE: &str = "ghost-build.xml";

/// File name of the optional settings file.
pub const SETTINGS_FILE: &str = "ghost.toml";

/// Context describing the project being built.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root; subprocesses run here and relative paths resolve here
    root: PathBuf,
}

impl ProjectContext {
    /// Create a context rooted at the current working directory.
    pub fn new() -> Result<Self> {
        let root = std::env::current_dir().context("failed to get current directory")?;
        Ok(ProjectContext { root })
    }

    /// Create a context rooted at a specific directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        ProjectContext { root: root.into() }
    }

    /// Get the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the build-config directory (`ghost-build/`).
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    /// Get the build document path (`ghost-build/ghost-build.xml`).
    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }

    /// Get the settings path (`ghost-build/ghost.toml`).
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir().join(SETTINGS_FILE)
    }

    /// Load tool settings, falling back to defaults.
    pub fn settings(&self) -> Settings {
        Settings::load_or_default(&self.settings_path())
    }
}
