//! The `easy-install.pth` manifest
//!
//! A [`Manifest`] keeps every line of the file, in order, with its original
//! terminator. Path entries can be checked for relative order and moved to
//! the end of the file; every other line is carried through untouched.

mod line;

pub use line::{Line, LineEnding, LineKind, parse_lines};

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use editable_fs::io;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::locator::ManifestLocation;

/// In-memory view of one manifest file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    location: ManifestLocation,
    lines: Vec<Line>,
}

impl Manifest {
    /// Read and parse the manifest at `location`.
    pub fn load(location: ManifestLocation) -> Result<Self> {
        let content = io::read_text(location.path()).map_err(Error::Read)?;
        let manifest = Self::parse(location, &content);

        debug!(
            path = %manifest.location,
            lines = manifest.lines.len(),
            entries = manifest.entries().count(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Build a manifest from content that is already in memory.
    pub fn parse(location: ManifestLocation, content: &str) -> Self {
        Self {
            location,
            lines: parse_lines(content),
        }
    }

    pub fn location(&self) -> &ManifestLocation {
        &self.location
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines classified as [`LineKind::PathEntry`].
    pub fn entries(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.is_entry())
    }

    /// Full current content, byte-identical to the file until a reorder.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            line.render_into(&mut out);
        }
        out
    }

    /// Index of the first line matching `directory`.
    pub fn position(&self, directory: impl AsRef<Path>) -> Option<usize> {
        let directory = directory.as_ref();
        self.lines.iter().position(|line| line.matches(directory))
    }

    /// Terminator used by most lines; ties fall back to the platform default.
    pub fn dominant_ending(&self) -> LineEnding {
        let (lf, crlf) = self
            .lines
            .iter()
            .fold((0usize, 0usize), |(lf, crlf), line| match line.ending() {
                LineEnding::Lf => (lf + 1, crlf),
                LineEnding::CrLf => (lf, crlf + 1),
                LineEnding::None => (lf, crlf),
            });

        match lf.cmp(&crlf) {
            Ordering::Greater => LineEnding::Lf,
            Ordering::Less => LineEnding::CrLf,
            Ordering::Equal => LineEnding::native(),
        }
    }

    /// Verify that `directories` appear in the manifest in the given relative
    /// order. Other lines may sit between them.
    pub fn assert_ordered<P: AsRef<Path>>(&self, directories: &[P]) -> Result<()> {
        let positions = self.resolve(directories)?;

        for (i, pair) in positions.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(Error::OutOfOrder {
                    first: directories[i].as_ref().to_path_buf(),
                    second: directories[i + 1].as_ref().to_path_buf(),
                });
            }
        }

        Ok(())
    }

    /// Plan a reorder without touching the file.
    ///
    /// Lines matching any requested directory are removed from where they
    /// are and one line per directory is appended in the requested order.
    pub fn reordered<P: AsRef<Path>>(&self, directories: &[P]) -> Result<Self> {
        let positions = self.resolve(directories)?;
        if positions.is_empty() {
            return Ok(self.clone());
        }

        let ending = self.dominant_ending();
        let ends_with_newline = self
            .lines
            .last()
            .is_none_or(|line| line.ending() != LineEnding::None);

        let mut lines: Vec<Line> = self
            .lines
            .iter()
            .filter(|line| !directories.iter().any(|d| line.matches(d.as_ref())))
            .cloned()
            .collect();

        if let Some(last) = lines.last_mut() {
            if last.ending() == LineEnding::None {
                last.set_ending(ending);
            }
        }

        let count = positions.len();
        for (i, &position) in positions.iter().enumerate() {
            let line_ending = if i + 1 == count && !ends_with_newline {
                LineEnding::None
            } else {
                ending
            };
            lines.push(Line::new(self.lines[position].text(), line_ending));
        }

        Ok(Self {
            location: self.location.clone(),
            lines,
        })
    }

    /// Move `directories` to the end of the manifest in the given order and
    /// persist the result atomically.
    ///
    /// Nothing is written when the file already has the planned content.
    pub fn reorder<P: AsRef<Path>>(&mut self, directories: &[P]) -> Result<()> {
        let planned = self.reordered(directories)?;
        if planned.lines == self.lines {
            info!(path = %self.location, "Manifest already in requested order");
            return Ok(());
        }

        let content = planned.render();
        io::write_atomic(self.location.path(), content.as_bytes()).map_err(Error::Write)?;
        info!(
            path = %self.location,
            moved = directories.len(),
            "Reordered manifest"
        );

        self.lines = planned.lines;
        Ok(())
    }

    /// Line index of every requested directory, in request order.
    fn resolve<P: AsRef<Path>>(&self, directories: &[P]) -> Result<Vec<usize>> {
        let mut seen = HashSet::new();
        for directory in directories {
            let directory = directory.as_ref();
            if !seen.insert(directory.as_os_str()) {
                return Err(Error::DuplicateDirectory {
                    directory: directory.to_path_buf(),
                });
            }
        }

        directories
            .iter()
            .map(|directory| {
                let directory = directory.as_ref();
                self.position(directory)
                    .ok_or_else(|| Error::entry_not_found(directory))
            })
            .collect()
    }
}
