//! Resolution of user-supplied directory arguments
//!
//! Manifest entries are absolute paths, so every directory a user names on
//! the command line is expanded (`~`), made absolute against the current
//! directory, and cleaned of `.`/`..` components before it is compared.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// Expand a leading `~` to the user's home directory.
///
/// Only the bare `~` and `~/...` forms are expanded; `~user` is returned
/// unchanged.
pub fn expand_home(input: &str) -> Result<PathBuf> {
    let rest = if input == "~" {
        Some("")
    } else {
        input.strip_prefix("~/").or_else(|| {
            if cfg!(windows) {
                input.strip_prefix("~\\")
            } else {
                None
            }
        })
    };

    match rest {
        Some(rest) => {
            let home = dirs::home_dir().ok_or(Error::HomeUnavailable)?;
            Ok(if rest.is_empty() { home } else { home.join(rest) })
        }
        None => Ok(PathBuf::from(input)),
    }
}

/// Remove `.` components and fold `..` into its parent without touching the
/// filesystem.
///
/// `..` never climbs above the root of an absolute path. Leading `..` of a
/// relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | Some(Component::CurDir) | None => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Make `path` absolute against `base` and normalize it lexically.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&base.join(path))
    }
}

/// Resolve a user-supplied directory argument to an absolute, existing path.
pub fn resolve_existing(input: &str) -> Result<PathBuf> {
    let expanded = expand_home(input)?;
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    let resolved = absolutize(&expanded, &cwd);

    if !resolved.exists() {
        return Err(Error::PathMissing { path: resolved });
    }
    Ok(resolved)
}
