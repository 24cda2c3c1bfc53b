//! Error types for editable-cli

use editable_core::Manifest;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from editable-core
    #[error(transparent)]
    Core(#[from] editable_core::Error),

    /// Error from editable-fs
    #[error(transparent)]
    Fs(#[from] editable_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The manifest was read but refused the request; `contents` is what the
    /// file held at the time.
    #[error("{source}")]
    Rejected {
        source: editable_core::Error,
        contents: String,
    },
}

impl CliError {
    pub fn rejected(source: editable_core::Error, manifest: &Manifest) -> Self {
        Self::Rejected {
            source,
            contents: manifest.render(),
        }
    }

    /// Suggestion printed after the error, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Core(e) if e.is_not_found() => Some(
                "activate the environment or pass --easy-install-location <PATH>",
            ),
            _ => None,
        }
    }

    /// Manifest contents to show alongside the error message.
    pub fn manifest_contents(&self) -> Option<&str> {
        match self {
            Self::Rejected { contents, .. } => Some(contents),
            _ => None,
        }
    }
}
