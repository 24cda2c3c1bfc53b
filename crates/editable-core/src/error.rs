//! Error types for editable-core

use std::path::{Path, PathBuf};

/// Result type for editable-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in editable-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No manifest file at the override path or at any probed candidate
    #[error("Could not find easy-install.pth; searched: {}", display_paths(searched))]
    ManifestNotFound { searched: Vec<PathBuf> },

    /// A requested directory has no matching manifest line
    #[error("{} is not in the manifest", directory.display())]
    EntryNotFound { directory: PathBuf },

    /// Both entries exist, but `first` appears after `second`
    #[error("{} must appear before {}, but it appears after it", first.display(), second.display())]
    OutOfOrder { first: PathBuf, second: PathBuf },

    /// The same directory was requested more than once
    #[error("{} was requested more than once", directory.display())]
    DuplicateDirectory { directory: PathBuf },

    /// Failure while reading or decoding the manifest
    #[error("Failed to read manifest: {0}")]
    Read(#[source] editable_fs::Error),

    /// Failure while persisting the manifest
    #[error("Failed to write manifest: {0}")]
    Write(#[source] editable_fs::Error),
}

impl Error {
    /// True for both the missing-manifest and the missing-entry cases.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ManifestNotFound { .. } | Self::EntryNotFound { .. })
    }

    pub(crate) fn entry_not_found(directory: &Path) -> Self {
        Self::EntryNotFound {
            directory: directory.to_path_buf(),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(no candidate locations)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
