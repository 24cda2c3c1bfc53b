//! Locate command implementation

use std::io::Write;

use editable_core::Locator;

use crate::cli::LocationArgs;
use crate::error::Result;

/// Print the absolute path of the manifest that other commands would use.
pub fn run_locate(locator: &Locator, args: &LocationArgs, out: &mut impl Write) -> Result<()> {
    let location = locator.locate(args.easy_install_location.as_deref())?;
    writeln!(out, "{}", location)?;
    Ok(())
}
