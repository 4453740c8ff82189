//! Lexer error types.
//!
//! Every lexical error carries its kind, the position it was detected at and
//! the label of the unit being tokenized.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use uwu_diagnostic::{Diagnostic, ErrorCode};
use uwu_ir::{SourceLabel, SourcePosition};

/// A fatal tokenizer error.
#[derive(Clone, Debug, PartialEq, Error)]
#[error(
    "in {} at char {} [{}] {}",
    .label.display_name(),
    .position.index,
    .position,
    .kind
)]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE the offending character (or end of input) was found.
    pub position: SourcePosition,
    /// Which unit was being tokenized.
    pub label: Arc<SourceLabel>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    UnknownCharacter { found: char },
    /// A decimal point followed by something other than a digit or `_`.
    /// `found` is `None` when the input ended right after the point.
    ExpectedDecimalDigit { found: Option<char> },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnknownCharacter { found } => {
                write!(f, "unknown token {found:?}")
            }
            LexErrorKind::ExpectedDecimalDigit { found: Some(found) } => {
                write!(
                    f,
                    "expected digit or underscore after decimal point, found {found:?}"
                )
            }
            LexErrorKind::ExpectedDecimalDigit { found: None } => {
                write!(
                    f,
                    "expected digit or underscore after decimal point, found end of input"
                )
            }
        }
    }
}

impl LexError {
    /// Create an unknown character error.
    #[cold]
    pub fn unknown_character(found: char, position: SourcePosition, label: Arc<SourceLabel>) -> Self {
        LexError {
            kind: LexErrorKind::UnknownCharacter { found },
            position,
            label,
        }
    }

    /// Create a malformed decimal error.
    #[cold]
    pub fn expected_decimal_digit(
        found: Option<char>,
        position: SourcePosition,
        label: Arc<SourceLabel>,
    ) -> Self {
        LexError {
            kind: LexErrorKind::ExpectedDecimalDigit { found },
            position,
            label,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnknownCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::ExpectedDecimalDigit { .. } => ErrorCode::E0002,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match self.kind {
            LexErrorKind::UnknownCharacter { .. } => diag
                .with_label(self.position, 1, "unexpected character")
                .with_note("names may contain letters, digits and `_ ! . @ / \\ ~ :`"),
            LexErrorKind::ExpectedDecimalDigit { found } => diag
                .with_label(
                    self.position,
                    u32::from(found.is_some()),
                    "expected a digit here",
                )
                .with_suggestion("write the fraction explicitly, e.g. `1.0`"),
        }
    }
}

#[cfg(test)]
mod tests;
