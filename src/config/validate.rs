//! Validation of the build document.
//!
//! Fields are checked one at a time in a fixed order and the first
//! violation ends validation. The order is part of the exit-code contract:
//!
//! 1. `Compiler` attribute (present, not `NULL`, a known family)
//! 2. `CType` attribute (present, a known language)
//! 3. the six required child elements
//! 4. existence of the main source file

use std::path::Path;

use crate::core::{
    AuxiliaryScript, BuildConfig, CompileFlags, CompilerFamily, Language, PerPlatform,
};
use crate::error::{GhostError, RequiredAttribute, RequiredElement};

use super::loader::{Document, Element};

/// Reserved value meaning "intentionally unset".
pub const SENTINEL: &str = "NULL";

/// Extension of auxiliary scripts.
pub const SCRIPT_EXTENSION: &str = ".py";

/// Surrounding whitespace does not make a value set.
fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == SENTINEL
}

/// Validate a parsed document into a [`BuildConfig`].
///
/// `root` is the project root (the main file is resolved against it) and
/// `config_dir` the build-config directory auxiliary scripts live in.
pub fn validate(doc: &Document, root: &Path, config_dir: &Path) -> Result<BuildConfig, GhostError> {
    let ghost = doc.root();

    let compiler = compiler_family(ghost)?;
    let language = language(ghost)?;

    let build_name = element_text(ghost, RequiredElement::BuildName)?;
    let main_file = element_text(ghost, RequiredElement::MainFile)?;

    let flags = PerPlatform::new(
        normalize_flags(element_text(ghost, RequiredElement::WindowsFlags)?),
        normalize_flags(element_text(ghost, RequiredElement::LinuxFlags)?),
    );

    let auxiliary = PerPlatform::new(
        normalize_auxiliary(element_text(ghost, RequiredElement::WindowsAuxiliary)?, config_dir),
        normalize_auxiliary(element_text(ghost, RequiredElement::LinuxAuxiliary)?, config_dir),
    );

    let config = BuildConfig {
        compiler,
        language,
        build_name,
        main_file,
        flags,
        auxiliary,
    };

    check_main_file(&config, root)?;

    Ok(config)
}

fn required_attribute<'a>(
    element: &'a Element,
    attribute: RequiredAttribute,
) -> Result<&'a str, GhostError> {
    element
        .attribute(attribute.name())
        .filter(|value| !value.is_empty())
        .ok_or(GhostError::MissingAttribute { attribute })
}

fn compiler_family(element: &Element) -> Result<CompilerFamily, GhostError> {
    let value = required_attribute(element, RequiredAttribute::Compiler)?;

    // Shipped templates use NULL; it gets its own code so an unedited
    // template is recognizable.
    if value == SENTINEL {
        return Err(GhostError::SentinelCompilerUnset);
    }

    let family = value
        .parse::<CompilerFamily>()
        .map_err(|e| GhostError::InvalidAttribute {
            attribute: RequiredAttribute::Compiler,
            value: e.0,
        })?;
    tracing::debug!("compiler family: {}", family);
    Ok(family)
}

fn language(element: &Element) -> Result<Language, GhostError> {
    let value = required_attribute(element, RequiredAttribute::CType)?;

    let language = value
        .parse::<Language>()
        .map_err(|e| GhostError::InvalidAttribute {
            attribute: RequiredAttribute::CType,
            value: e.0,
        })?;
    tracing::debug!("language: {}", language);
    Ok(language)
}

/// Text of a required child element.
///
/// Elements that require text fail when blank and are trimmed; optional
/// slots yield `""` when blank and are otherwise returned as written.
fn element_text(parent: &Element, element: RequiredElement) -> Result<String, GhostError> {
    let child = parent
        .find(element.tag())
        .ok_or(GhostError::MissingElement { element })?;

    match child.text() {
        Some(text) => {
            let text = if element.requires_text() { text.trim() } else { text };
            tracing::debug!("{}: {:?}", element, text);
            Ok(text.to_string())
        }
        None if element.requires_text() => Err(GhostError::MissingElement { element }),
        None => Ok(String::new()),
    }
}

/// Normalize a flags value: empty or `NULL` means no flags. Anything else
/// is kept exactly as written.
pub fn normalize_flags(value: String) -> CompileFlags {
    if is_unset(&value) {
        CompileFlags::none()
    } else {
        CompileFlags::new(value)
    }
}

/// Normalize an auxiliary slot: empty or `NULL` means unset, anything else
/// resolves to a script inside `config_dir`.
///
/// The script extension is appended unless the value already carries it.
pub fn normalize_auxiliary(value: String, config_dir: &Path) -> Option<AuxiliaryScript> {
    if is_unset(&value) {
        return None;
    }
    let value = value.trim().to_string();

    let path = if value.ends_with(SCRIPT_EXTENSION) {
        config_dir.join(&value)
    } else {
        config_dir.join(format!("{}{}", value, SCRIPT_EXTENSION))
    };

    Some(AuxiliaryScript {
        declared: value,
        path,
    })
}

/// The main source file must exist before anything is resolved or run.
pub fn check_main_file(config: &BuildConfig, root: &Path) -> Result<(), GhostError> {
    let path = config.main_file_path(root);
    if path.is_file() {
        Ok(())
    } else {
        Err(GhostError::MissingMainFile { path })
    }
}
