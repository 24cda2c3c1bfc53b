//! Line model for `.pth` manifests

use std::ffi::OsStr;
use std::path::Path;

/// Terminator that followed a line in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Final line of a file that does not end with a newline
    None,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::None => "",
        }
    }

    /// Newline convention of the host platform.
    pub fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }
}

/// Classification of a manifest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The trimmed text is an absolute filesystem path
    PathEntry,
    /// Anything else: blank lines, `import` boilerplate, comments
    Opaque,
}

/// One raw manifest line together with its original terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    ending: LineEnding,
}

impl Line {
    pub fn new(text: impl Into<String>, ending: LineEnding) -> Self {
        Self {
            text: text.into(),
            ending,
        }
    }

    /// Line content without its terminator.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Trimmed content, the form compared against directories.
    pub fn value(&self) -> &str {
        self.text.trim()
    }

    pub fn kind(&self) -> LineKind {
        let value = self.value();
        if !value.is_empty() && Path::new(value).is_absolute() {
            LineKind::PathEntry
        } else {
            LineKind::Opaque
        }
    }

    pub fn is_entry(&self) -> bool {
        self.kind() == LineKind::PathEntry
    }

    /// Byte-equality between the trimmed content and `directory`.
    pub fn matches(&self, directory: &Path) -> bool {
        OsStr::new(self.value()) == directory.as_os_str()
    }

    pub(crate) fn set_ending(&mut self, ending: LineEnding) {
        self.ending = ending;
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str(&self.text);
        out.push_str(self.ending.as_str());
    }
}

/// Split `content` into lines, keeping each line's terminator.
///
/// Joining the returned lines with their terminators reproduces `content`
/// exactly. A trailing newline does not produce an extra empty line.
pub fn parse_lines(content: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find('\n') {
            Some(idx) => {
                let raw = &rest[..idx];
                let line = match raw.strip_suffix('\r') {
                    Some(body) => Line::new(body, LineEnding::CrLf),
                    None => Line::new(raw, LineEnding::Lf),
                };
                lines.push(line);
                rest = &rest[idx + 1..];
            }
            None => {
                lines.push(Line::new(rest, LineEnding::None));
                break;
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_mixed_endings() {
        let lines = parse_lines("/a\r\nimport x\n/b");
        assert_eq!(
            lines,
            vec![
                Line::new("/a", LineEnding::CrLf),
                Line::new("import x", LineEnding::Lf),
                Line::new("/b", LineEnding::None),
            ]
        );
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert!(parse_lines("").is_empty());
        assert_eq!(
            parse_lines("\n\n"),
            vec![Line::new("", LineEnding::Lf), Line::new("", LineEnding::Lf)]
        );
    }

    #[test]
    fn test_lone_carriage_return_stays_in_text() {
        let lines = parse_lines("/a\r");
        assert_eq!(lines, vec![Line::new("/a\r", LineEnding::None)]);
        assert_eq!(lines[0].value(), "/a");
    }

    #[test]
    fn test_matches_uses_trimmed_value() {
        let line = Line::new("  /srv/pkg\t", LineEnding::Lf);
        assert!(line.matches(Path::new("/srv/pkg")));
        assert!(!line.matches(Path::new("/srv/pkg/")));
        assert!(!line.matches(Path::new("/srv")));
    }

    #[test]
    #[cfg(unix)]
    fn test_kind_classification() {
        assert_eq!(Line::new("/srv/pkg", LineEnding::Lf).kind(), LineKind::PathEntry);
        assert_eq!(
            Line::new("import sys; sys.path.insert(0, '/x')", LineEnding::Lf).kind(),
            LineKind::Opaque
        );
        assert_eq!(Line::new("relative/dir", LineEnding::Lf).kind(), LineKind::Opaque);
        assert_eq!(Line::new("   ", LineEnding::Lf).kind(), LineKind::Opaque);
        assert_eq!(Line::new("# comment", LineEnding::None).kind(), LineKind::Opaque);
    }
}
