//! Cat command implementation

use std::io::Write;

use editable_core::Locator;

use super::load_manifest;
use crate::cli::LocationArgs;
use crate::error::Result;

/// Print the manifest exactly as it is on disk.
pub fn run_cat(locator: &Locator, args: &LocationArgs, out: &mut impl Write) -> Result<()> {
    let manifest = load_manifest(locator, args)?;
    out.write_all(manifest.render().as_bytes())?;
    out.flush()?;
    Ok(())
}
