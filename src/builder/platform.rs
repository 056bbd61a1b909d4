//! Host detection and per-platform selection.

use crate::core::{AuxiliaryScript, BuildConfig, CompileFlags, CompilerFamily, HostPlatform};
use crate::error::GhostError;

/// Compiler substitutions keyed by (host, requested family).
///
/// Clang is not supported on Windows; GNU is used there instead. The
/// requested family is still what gets reported to the user.
const FAMILY_FALLBACKS: &[(HostPlatform, CompilerFamily, CompilerFamily)] = &[(
    HostPlatform::Windows,
    CompilerFamily::Clang,
    CompilerFamily::Gnu,
)];

/// Normalize an OS identifier (as in `std::env::consts::OS`) to a
/// supported host.
pub fn host_from_os(os: &str) -> Result<HostPlatform, GhostError> {
    HostPlatform::from_os(os).ok_or_else(|| GhostError::UnsupportedHostPlatform {
        os: os.to_string(),
    })
}

/// The compiler family actually invoked on `host`.
pub fn effective_family(host: HostPlatform, requested: CompilerFamily) -> CompilerFamily {
    FAMILY_FALLBACKS
        .iter()
        .find(|(h, from, _)| *h == host && *from == requested)
        .map(|(_, _, to)| *to)
        .unwrap_or(requested)
}

/// Everything about the build that depends on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformContext {
    pub host: HostPlatform,
    /// Family from the build document.
    pub requested: CompilerFamily,
    /// Family actually invoked after fallbacks.
    pub effective: CompilerFamily,
    /// Compiler driver binary, e.g. `g++`.
    pub compiler: &'static str,
    /// Flags for this host.
    pub flags: CompileFlags,
    /// Auxiliary script for this host, if set.
    pub auxiliary: Option<AuxiliaryScript>,
}

impl PlatformContext {
    /// Select the host-specific view of a validated config.
    pub fn resolve(config: &BuildConfig, host: HostPlatform) -> Self {
        let effective = effective_family(host, config.compiler);
        let compiler = effective.binary(config.language);

        if effective != config.compiler {
            tracing::debug!(
                "{} is not supported on {}, using {} ({})",
                config.compiler,
                host,
                effective,
                compiler
            );
        }

        PlatformContext {
            host,
            requested: config.compiler,
            effective,
            compiler,
            flags: config.flags.get(host).clone(),
            auxiliary: config.auxiliary.get(host).clone(),
        }
    }

    /// Whether the requested family was substituted.
    pub fn is_fallback(&self) -> bool {
        self.requested != self.effective
    }
}
