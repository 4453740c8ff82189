//! Parse error types.
//!
//! The parser pulls tokens lazily, so a lexical error can surface in the
//! middle of parsing; it is wrapped unchanged in [`ParseError::Lex`].

use std::sync::Arc;

use thiserror::Error;
use uwu_diagnostic::{Diagnostic, ErrorCode};
use uwu_ir::{SourceLabel, SourcePosition, Token, TokenTag};
use uwu_lexer::LexError;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A line did not start with a name.
    #[error(
        "in {} at {position}: expected {}, found {}",
        .label.display_name(),
        .expected.describe(),
        .found.describe()
    )]
    UnexpectedToken {
        expected: TokenTag,
        found: TokenTag,
        position: SourcePosition,
        span: u32,
        label: Arc<SourceLabel>,
    },

    /// Something other than a newline ended a sequence of expressions.
    #[error(
        "in {} at {position}: expected newline after sequence of expressions, found {}",
        .label.display_name(),
        .found.describe()
    )]
    ExpectedNewline {
        found: TokenTag,
        position: SourcePosition,
        span: u32,
        label: Arc<SourceLabel>,
    },

    /// A token of a kind that has no leaf expression form.
    #[error(
        "in {} at {position}: unknown token evaluated in name expression: {}",
        .label.display_name(),
        .found.describe()
    )]
    UnknownLeaf {
        found: TokenTag,
        position: SourcePosition,
        span: u32,
        label: Arc<SourceLabel>,
    },
}

impl ParseError {
    #[cold]
    pub(crate) fn unexpected(expected: TokenTag, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: found.tag(),
            position: found.position,
            span: found.span,
            label: Arc::clone(&found.source),
        }
    }

    #[cold]
    pub(crate) fn expected_newline(found: &Token) -> Self {
        ParseError::ExpectedNewline {
            found: found.tag(),
            position: found.position,
            span: found.span,
            label: Arc::clone(&found.source),
        }
    }

    #[cold]
    pub(crate) fn unknown_leaf(found: &Token) -> Self {
        ParseError::UnknownLeaf {
            found: found.tag(),
            position: found.position,
            span: found.span,
            label: Arc::clone(&found.source),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::ExpectedNewline { .. } => ErrorCode::E1002,
            ParseError::UnknownLeaf { .. } => ErrorCode::E1003,
        }
    }

    /// Where the error was detected.
    pub fn position(&self) -> SourcePosition {
        match self {
            ParseError::Lex(err) => err.position,
            ParseError::UnexpectedToken { position, .. }
            | ParseError::ExpectedNewline { position, .. }
            | ParseError::UnknownLeaf { position, .. } => *position,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::UnexpectedToken {
                expected,
                found,
                position,
                span,
                ..
            } => Diagnostic::error(self.code())
                .with_message(format!(
                    "expected {}, found {}",
                    expected.describe(),
                    found.describe()
                ))
                .with_label(
                    *position,
                    *span,
                    "not an identifier; a line must start with a keyword",
                )
                .with_note("each line is a keyword followed by its arguments"),
            ParseError::ExpectedNewline {
                found,
                position,
                span,
                ..
            } => Diagnostic::error(self.code())
                .with_message(format!(
                    "expected newline after sequence of expressions, found {}",
                    found.describe()
                ))
                .with_label(*position, *span, "expected a line break here"),
            ParseError::UnknownLeaf {
                found,
                position,
                span,
                ..
            } => Diagnostic::error(self.code())
                .with_message(format!(
                    "unknown token evaluated in name expression: {}",
                    found.describe()
                ))
                .with_label(*position, *span, "not a name or number"),
        }
    }
}
