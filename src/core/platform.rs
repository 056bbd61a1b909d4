use std::fmt;

/// Host operating systems Ghost can build on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    Windows,
    Linux,
}

impl HostPlatform {
    /// Normalize an OS identifier (as in `std::env::consts::OS`).
    ///
    /// Returns `None` for anything other than Windows or Linux.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "windows" => Some(HostPlatform::Windows),
            "linux" => Some(HostPlatform::Linux),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostPlatform::Windows => "Windows",
            HostPlatform::Linux => "Linux",
        }
    }

    /// Name of the produced executable.
    pub fn output_name(&self) -> &'static str {
        match self {
            HostPlatform::Windows => "ghost-build-windows.exe",
            HostPlatform::Linux => "ghost-build-linux",
        }
    }

    /// Default interpreter for auxiliary scripts.
    pub fn default_interpreter(&self) -> &'static str {
        match self {
            HostPlatform::Windows => "python",
            HostPlatform::Linux => "python3",
        }
    }
}

impl std::str::FromStr for HostPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(HostPlatform::Windows),
            "linux" => Ok(HostPlatform::Linux),
            _ => Err(format!(
                "invalid host '{}'; expected 'windows' or 'linux'",
                s
            )),
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
