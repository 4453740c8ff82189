//! Tokens produced by the tokenizer.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::{SourceLabel, SourcePosition};

/// A positioned lexeme.
///
/// Tokens are immutable once produced. Every token of a unit shares the same
/// [`SourceLabel`].
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Position of the first character of the lexeme.
    pub position: SourcePosition,
    /// Lexeme length in characters. Always 1 for single-character tokens.
    pub span: u32,
    pub source: Arc<SourceLabel>,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        position: SourcePosition,
        span: u32,
        source: Arc<SourceLabel>,
    ) -> Self {
        Token {
            kind,
            position,
            span,
            source,
        }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.position.index
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source.name()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.path()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} (char {}, span {})",
            self.kind, self.position, self.position.index, self.span
        )
    }
}

/// Token kind together with its literal payload.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    /// One or more line breaks; consecutive breaks collapse into one token.
    NewLine,
    /// Raw name text, e.g. `O.O` or `@_@`.
    Name(String),
    /// Decimal literal with digit separators already stripped.
    Number(f64),
    /// Type keyword. Reserved: the tokenizer does not produce it yet.
    Type(String),
    EndOfFile,
}

impl TokenKind {
    /// Payload-free discriminant.
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::NewLine => TokenTag::NewLine,
            TokenKind::Name(_) => TokenTag::Name,
            TokenKind::Number(_) => TokenTag::Number,
            TokenKind::Type(_) => TokenTag::Type,
            TokenKind::EndOfFile => TokenTag::EndOfFile,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::NewLine => write!(f, "NewLine"),
            TokenKind::Name(name) => write!(f, "Name({name:?})"),
            TokenKind::Number(value) => write!(f, "Number({value:?})"),
            TokenKind::Type(name) => write!(f, "Type({name:?})"),
            TokenKind::EndOfFile => write!(f, "EndOfFile"),
        }
    }
}

/// Discriminant of a [`TokenKind`], used wherever only the kind matters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenTag {
    NewLine,
    Name,
    Number,
    Type,
    EndOfFile,
}

impl TokenTag {
    /// Human-readable description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenTag::NewLine => "newline",
            TokenTag::Name => "name",
            TokenTag::Number => "number",
            TokenTag::Type => "type",
            TokenTag::EndOfFile => "end of file",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
