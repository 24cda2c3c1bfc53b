//! Manifest discovery
//!
//! The manifest is either named explicitly or found as `easy-install.pth`
//! inside one of the site-packages directories reported by an ordered list
//! of [`SiteSource`]s. The first readable candidate wins.

mod source;

pub use source::{EnvPrefix, Interpreter, SiteSource, StaticSource, site_packages_under};

use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// File name setuptools uses for the editable-install registry.
pub const MANIFEST_FILE_NAME: &str = "easy-install.pth";

/// Absolute path to a manifest file that existed and was readable when it
/// was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManifestLocation {
    path: PathBuf,
}

impl ManifestLocation {
    /// Resolve `path` to a canonical absolute location.
    ///
    /// Fails with [`Error::ManifestNotFound`] unless `path` is a regular file
    /// that can be opened for reading.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let not_found = || Error::ManifestNotFound {
            searched: vec![path.to_path_buf()],
        };

        if !is_readable_file(path) {
            return Err(not_found());
        }
        let canonical = dunce::canonicalize(path).map_err(|_| not_found())?;

        Ok(Self { path: canonical })
    }

    #[cfg(test)]
    pub(crate) fn unchecked(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for ManifestLocation {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ManifestLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

/// Ordered set of places to look for the manifest.
#[derive(Default)]
pub struct Locator {
    sources: Vec<Box<dyn SiteSource>>,
}

impl Locator {
    /// A locator with no sources; add them with [`Locator::with_source`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source. Sources are consulted in insertion order.
    pub fn with_source(mut self, source: impl SiteSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// The active virtualenv, the active conda env, then the interpreter
    /// (the platform default interpreter when `None`).
    pub fn from_environment(python: Option<&OsStr>) -> Self {
        let interpreter = match python {
            Some(program) => Interpreter::new(program),
            None => Interpreter::default(),
        };

        Self::new()
            .with_source(EnvPrefix::from_var("VIRTUAL_ENV"))
            .with_source(EnvPrefix::from_var("CONDA_PREFIX"))
            .with_source(interpreter)
    }

    /// Resolve the manifest.
    ///
    /// An override path is used as-is and never falls back to probing.
    /// Otherwise sources are consulted lazily, so later sources (such as the
    /// interpreter) only run when earlier ones have no manifest.
    pub fn locate(&self, override_path: Option<&Path>) -> Result<ManifestLocation> {
        if let Some(path) = override_path {
            debug!(path = %path.display(), "Using manifest override");
            return ManifestLocation::new(path);
        }

        let mut searched: Vec<PathBuf> = Vec::new();
        for source in &self.sources {
            for dir in source.site_dirs() {
                let candidate = dir.join(MANIFEST_FILE_NAME);
                if searched.contains(&candidate) {
                    continue;
                }

                debug!(source = source.name(), candidate = %candidate.display(), "Probing");
                match ManifestLocation::new(&candidate) {
                    Ok(location) => {
                        debug!(path = %location, "Found manifest");
                        return Ok(location);
                    }
                    Err(_) => searched.push(candidate),
                }
            }
        }

        Err(Error::ManifestNotFound { searched })
    }
}

/// Resolve the manifest using the default environment sources.
pub fn locate(override_path: Option<&Path>) -> Result<ManifestLocation> {
    Locator::from_environment(None).locate(override_path)
}
