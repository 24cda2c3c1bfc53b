//! Core of reorder-editable
//!
//! Locates a Python `easy-install.pth` manifest and manipulates the order of
//! the directory entries it registers:
//!
//! - **Locator**: resolves the manifest from an explicit override or from the
//!   site-packages directories of the active Python environment
//! - **Manifest**: line-preserving parse and render, order verification, and
//!   atomic reordering
//! - **Diff**: line-level preview of a planned rewrite
//!
//! # Architecture
//!
//! ```text
//!        editable-cli
//!             |
//!       editable-core
//!             |
//!        editable-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use editable_core::{Manifest, Result, locate};
//!
//! fn example() -> Result<()> {
//!     let location = locate(None)?;
//!     let mut manifest = Manifest::load(location)?;
//!     manifest.reorder(&["/home/dev/core", "/home/dev/plugin"])?;
//!     Ok(())
//! }
//! ```

pub mod diff;
pub mod error;
pub mod locator;
pub mod manifest;

pub use diff::{LineChange, ManifestDiff};
pub use error::{Error, Result};
pub use locator::{
    EnvPrefix, Interpreter, Locator, MANIFEST_FILE_NAME, ManifestLocation, SiteSource,
    StaticSource, locate,
};
pub use manifest::{Line, LineEnding, LineKind, Manifest};
