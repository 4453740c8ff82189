//! Source locations.

use std::fmt;
use std::path::{Path, PathBuf};

/// Snapshot of the tokenizer cursor, taken before a character is consumed.
///
/// `line` and `column` are zero-based; `index` counts characters (not bytes)
/// from the start of the input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
    pub index: u32,
}

impl SourcePosition {
    /// Position of the very first character.
    pub const START: SourcePosition = SourcePosition {
        line: 0,
        column: 0,
        index: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, index: u32) -> Self {
        SourcePosition {
            line,
            column,
            index,
        }
    }
}

impl fmt::Display for SourcePosition {
    /// Renders as `line:column`, one-based.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Where a compiled unit came from. Used only for error messages.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceLabel {
    /// Display label, usually the file name.
    pub name: Option<String>,
    /// Origin locator, usually the full path.
    pub path: Option<PathBuf>,
}

impl SourceLabel {
    pub fn new(name: Option<String>, path: Option<PathBuf>) -> Self {
        SourceLabel { name, path }
    }

    /// Label used for in-memory sources.
    pub fn string() -> Self {
        SourceLabel {
            name: Some("<string>".to_string()),
            path: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Best human-readable label: the name, then the path, then `<unknown>`.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.path) {
            (Some(name), _) => name.clone(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => "<unknown>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn position_displays_one_based() {
        assert_eq!(SourcePosition::new(0, 0, 0).to_string(), "1:1");
        assert_eq!(SourcePosition::new(2, 7, 30).to_string(), "3:8");
    }

    #[test]
    fn display_name_prefers_name_over_path() {
        let both = SourceLabel::new(Some("a.uwu".into()), Some("/tmp/a.uwu".into()));
        assert_eq!(both.display_name(), "a.uwu");

        let path_only = SourceLabel::new(None, Some("/tmp/b.uwu".into()));
        assert_eq!(path_only.display_name(), "/tmp/b.uwu");

        assert_eq!(SourceLabel::default().display_name(), "<unknown>");
    }
}
