//! Reorder command implementation

use std::io::Write;

use editable_core::{Locator, ManifestDiff};
use tracing::info;

use super::{load_manifest, resolve_directories};
use crate::cli::LocationArgs;
use crate::error::{CliError, Result};

/// Move `directories` to the end of the manifest in the given order.
///
/// With `dry_run` the planned change is printed as a line diff and the file
/// is left alone.
pub fn run_reorder(
    locator: &Locator,
    args: &LocationArgs,
    directories: &[String],
    dry_run: bool,
    out: &mut impl Write,
) -> Result<()> {
    let dirs = resolve_directories(directories)?;
    let mut manifest = load_manifest(locator, args)?;

    if dry_run {
        let planned = manifest
            .reordered(&dirs)
            .map_err(|e| CliError::rejected(e, &manifest))?;
        let diff = ManifestDiff::compute(&manifest.render(), &planned.render());

        if diff.is_unchanged() {
            writeln!(out, "{} is already in the requested order", manifest.location())?;
        } else {
            write!(out, "{}", diff)?;
        }
        return Ok(());
    }

    if let Err(e) = manifest.reorder(&dirs) {
        return Err(CliError::rejected(e, &manifest));
    }

    info!(path = %manifest.location(), count = dirs.len(), "Reorder complete");
    Ok(())
}
