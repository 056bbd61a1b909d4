//! Tool settings for Ghost.
//!
//! Settings live next to the build document in `ghost-build/ghost.toml` and
//! are entirely optional. They only tune how Ghost runs things, never what
//! gets built:
//!
//! ```toml
//! [auxiliary]
//! windows-interpreter = "python"
//! linux-interpreter = "python3"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::HostPlatform;

/// Ghost settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Auxiliary script settings
    pub auxiliary: AuxiliarySettings,
}

/// How auxiliary scripts are launched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AuxiliarySettings {
    /// Interpreter used on Windows (default: `python`)
    pub windows_interpreter: Option<String>,

    /// Interpreter used on Linux (default: `python3`)
    pub linux_interpreter: Option<String>,
}

impl Settings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse settings file: {}", path.display()))
    }

    /// Load settings with fallback to defaults if the file doesn't exist or
    /// can't be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load settings from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Interpreter for auxiliary scripts on the given host.
    pub fn interpreter(&self, host: HostPlatform) -> &str {
        let configured = match host {
            HostPlatform::Windows => self.auxiliary.windows_interpreter.as_deref(),
            HostPlatform::Linux => self.auxiliary.linux_interpreter.as_deref(),
        };

        configured
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| host.default_interpreter())
    }
}
