//! Command implementations for editable-cli

pub mod cat;
pub mod check;
pub mod locate;
pub mod reorder;

pub use cat::run_cat;
pub use check::run_check;
pub use locate::run_locate;
pub use reorder::run_reorder;

use std::path::PathBuf;

use editable_core::{Locator, Manifest};

use crate::cli::LocationArgs;
use crate::error::Result;

/// Resolve DIRECTORY arguments to absolute, existing paths.
pub(crate) fn resolve_directories(directories: &[String]) -> Result<Vec<PathBuf>> {
    directories
        .iter()
        .map(|d| editable_fs::resolve_existing(d).map_err(Into::into))
        .collect()
}

pub(crate) fn load_manifest(locator: &Locator, args: &LocationArgs) -> Result<Manifest> {
    let location = locator.locate(args.easy_install_location.as_deref())?;
    Ok(Manifest::load(location)?)
}
