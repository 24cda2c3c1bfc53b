//! Check command implementation

use editable_core::Locator;
use tracing::info;

use super::{load_manifest, resolve_directories};
use crate::cli::LocationArgs;
use crate::error::{CliError, Result};

/// Succeed only if `directories` appear in the manifest in the given order.
pub fn run_check(locator: &Locator, args: &LocationArgs, directories: &[String]) -> Result<()> {
    let dirs = resolve_directories(directories)?;
    let manifest = load_manifest(locator, args)?;

    manifest
        .assert_ordered(&dirs)
        .map_err(|e| CliError::rejected(e, &manifest))?;

    info!(path = %manifest.location(), count = dirs.len(), "Manifest is ordered");
    Ok(())
}
