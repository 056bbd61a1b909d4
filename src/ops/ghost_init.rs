//! Implementation of `ghost init`.

use std::fs;
use std::path::PathBuf;

use crate::error::GhostError;
use crate::util::ProjectContext;

/// Template build document.
///
/// The compiler is left as `NULL` so an unedited template is rejected.
pub const TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Ghost build config. Set Compiler to GNU or Clang and CType to C or C++. -->
<GhostBuild Compiler="NULL" CType="C">
    <BuildName>ghost-build</BuildName>
    <CMainFile>main.c</CMainFile>
    <CFlagsWindows>NULL</CFlagsWindows>
    <CFlagsLinux>NULL</CFlagsLinux>
    <!-- Auxiliary scripts are resolved inside ghost-build/, `.py` is appended. -->
    <WindowsAuxiliary>NULL</WindowsAuxiliary>
    <LinuxAuxiliary>NULL</LinuxAuxiliary>
</GhostBuild>
"#;

/// Write the template build document. Returns its path.
pub fn init_project(ctx: &ProjectContext) -> Result<PathBuf, GhostError> {
    let path = ctx.config_path();
    if path.exists() {
        return Err(GhostError::ProjectExists { path });
    }

    let dir = ctx.config_dir();
    fs::create_dir_all(&dir).map_err(|source| GhostError::InitFailed {
        path: dir.clone(),
        source,
    })?;

    fs::write(&path, TEMPLATE).map_err(|source| GhostError::InitFailed {
        path: path.clone(),
        source,
    })?;

    tracing::debug!("wrote template {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_build_config;
    use crate::test_support::TestProject;

    #[test]
    fn test_init_writes_template() {
        let project = TestProject::new();
        let path = init_project(project.ctx()).unwrap();

        assert_eq!(path, project.ctx().config_path());
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_unedited_template_is_rejected_as_unset() {
        let project = TestProject::with_main_file("main.c");
        init_project(project.ctx()).unwrap();

        let err = load_build_config(project.ctx()).unwrap_err();
        assert!(matches!(err, GhostError::SentinelCompilerUnset));
        assert_eq!(err.exit_code(), -1);
    }

    #[test]
    fn test_edited_template_validates() {
        let project = TestProject::with_main_file("main.c");
        let path = init_project(project.ctx()).unwrap();
        let edited = TEMPLATE.replace(r#"Compiler="NULL""#, r#"Compiler="GNU""#);
        fs::write(&path, edited).unwrap();

        let config = load_build_config(project.ctx()).unwrap();
        assert!(config.flags.linux.is_empty());
        assert!(config.auxiliary.windows.is_none());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let project = TestProject::new();
        init_project(project.ctx()).unwrap();

        let err = init_project(project.ctx()).unwrap_err();
        assert_eq!(err.exit_code(), 20);
    }
}
