//! Filesystem primitives for reorder-editable
//!
//! Provides user path resolution and safe I/O operations for the
//! `.pth` manifest.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::{expand_home, normalize_lexically, resolve_existing};
