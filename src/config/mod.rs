//! The build document: loading and validation.

pub mod loader;
pub mod validate;

pub use loader::{Document, Element, ROOT_TAG};
pub use validate::{validate, SENTINEL};

use crate::core::BuildConfig;
use crate::error::GhostError;
use crate::util::ProjectContext;

/// Load and validate the project's build document.
pub fn load_build_config(ctx: &ProjectContext) -> Result<BuildConfig, GhostError> {
    let doc = loader::load(&ctx.config_path())?;
    validate(&doc, ctx.root(), &ctx.config_dir())
}
