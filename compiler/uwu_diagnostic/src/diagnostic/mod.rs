//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`] and [`Label`], the building blocks that all
//! compiler phases use to report errors. Every diagnostic is a fatal error;
//! there are no warnings.

use std::fmt;

use uwu_ir::SourcePosition;

use crate::ErrorCode;

/// A labeled source location with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// Where the highlighted text starts.
    pub position: SourcePosition,
    /// Number of characters to underline (at least one is drawn).
    pub len: u32,
    /// The label text explaining this location.
    pub message: String,
}

impl Label {
    pub fn new(position: SourcePosition, len: u32, message: impl Into<String>) -> Self {
        Label {
            position,
            len,
            message: message.into(),
        }
    }
}

/// A diagnostic with all context needed for a readable error message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Labeled locations showing where the error occurred.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Text suggestions for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a label at the error location.
    pub fn with_label(
        mut self,
        position: SourcePosition,
        len: u32,
        message: impl Into<String>,
    ) -> Self {
        self.labels.push(Label::new(position, len, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Position of the first label, where the error was detected.
    pub fn primary_position(&self) -> Option<SourcePosition> {
        self.labels.first().map(|l| l.position)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            write!(f, "\n  --> {}: {}", label.position, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}
