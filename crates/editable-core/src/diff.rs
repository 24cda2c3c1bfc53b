//! Line-level preview of a manifest rewrite

use std::fmt;

use similar::{ChangeTag, TextDiff};

/// One line of a diff between two manifest renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    Kept(String),
    Removed(String),
    Added(String),
}

impl LineChange {
    fn marker(&self) -> char {
        match self {
            Self::Kept(_) => ' ',
            Self::Removed(_) => '-',
            Self::Added(_) => '+',
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Kept(text) | Self::Removed(text) | Self::Added(text) => text,
        }
    }
}

/// Result of comparing the current manifest with a planned one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    pub changes: Vec<LineChange>,
}

impl ManifestDiff {
    /// Compare two renderings line by line.
    ///
    /// Terminators are stripped from the reported text, so a change of
    /// newline style alone shows up as a removed and an added line with the
    /// same text.
    pub fn compute(old: &str, new: &str) -> Self {
        let text_diff = TextDiff::from_lines(old, new);

        let changes = text_diff
            .iter_all_changes()
            .map(|change| {
                let text = change
                    .value()
                    .trim_end_matches(['\n', '\r'])
                    .to_string();
                match change.tag() {
                    ChangeTag::Equal => LineChange::Kept(text),
                    ChangeTag::Delete => LineChange::Removed(text),
                    ChangeTag::Insert => LineChange::Added(text),
                }
            })
            .collect();

        Self { changes }
    }

    /// True when no line was added or removed.
    pub fn is_unchanged(&self) -> bool {
        self.changes
            .iter()
            .all(|change| matches!(change, LineChange::Kept(_)))
    }
}

impl fmt::Display for ManifestDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for change in &self.changes {
            writeln!(f, "{}{}", change.marker(), change.text())?;
        }
        Ok(())
    }
}
