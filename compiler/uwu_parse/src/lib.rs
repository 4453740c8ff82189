//! Parser for UwU source.
//!
//! Groups the token stream into one [`TList`] per non-blank line:
//!
//! ```text
//! unit  := line* EOF
//! line  := NEWLINE | NAME leaf* NEWLINE
//! leaf  := NAME | NUMBER | TYPE
//! ```
//!
//! Every error is fatal; the first one aborts the parse.

mod cursor;
mod error;

use tracing::{debug, instrument};
use uwu_ir::{Expr, Identifier, NumberLiteral, TList, Token, TokenKind, TokenTag, TreeRoot};
use uwu_lexer::Tokenizer;

use cursor::Cursor;

pub use error::ParseError;

/// Result of parsing one line.
enum Line {
    Blank,
    List(TList),
    End,
}

/// Turns a token stream into a [`TreeRoot`] of flat lists.
pub struct Parser<I: Iterator<Item = char>> {
    cursor: Cursor<I>,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Create a parser, reading the first token.
    ///
    /// # Errors
    ///
    /// Fails if the very first token is a lexical error.
    pub fn new(tokenizer: Tokenizer<I>) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(tokenizer)?,
        })
    }

    /// The token under the cursor.
    pub fn current(&self) -> &Token {
        self.cursor.current()
    }

    /// The token consumed most recently, if any.
    pub fn last(&self) -> Option<&Token> {
        self.cursor.last()
    }

    /// Parse the whole unit.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntax error encountered.
    #[instrument(level = "debug", skip_all)]
    pub fn parse(&mut self) -> Result<TreeRoot<TList>, ParseError> {
        let mut children = Vec::new();
        loop {
            match self.parse_line()? {
                Line::Blank => {}
                Line::List(list) => {
                    debug!(leaves = list.children.len(), "parsed line");
                    children.push(list);
                }
                Line::End => break,
            }
        }
        debug!(lines = children.len(), "parsed unit");
        Ok(TreeRoot::new(children))
    }

    fn parse_line(&mut self) -> Result<Line, ParseError> {
        match self.cursor.current().tag() {
            TokenTag::NewLine => {
                self.cursor.advance()?;
                Ok(Line::Blank)
            }
            TokenTag::EndOfFile => {
                self.cursor.advance()?;
                Ok(Line::End)
            }
            TokenTag::Name => self.parse_list().map(Line::List),
            TokenTag::Number | TokenTag::Type => Err(ParseError::unexpected(
                TokenTag::Name,
                self.cursor.current(),
            )),
        }
    }

    /// Parse `NAME leaf* NEWLINE`. The current token is known to be a name.
    fn parse_list(&mut self) -> Result<TList, ParseError> {
        let mut children = vec![self.parse_leaf()?];

        while matches!(
            self.cursor.current().tag(),
            TokenTag::Name | TokenTag::Number | TokenTag::Type
        ) {
            children.push(self.parse_leaf()?);
        }

        if !self.cursor.check(TokenTag::NewLine) {
            return Err(ParseError::expected_newline(self.cursor.current()));
        }
        self.cursor.advance()?;

        Ok(TList::new(children))
    }

    /// Consume the current token and evaluate it as a leaf expression.
    fn parse_leaf(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let expr = match &token.kind {
            TokenKind::Name(name) => Expr::Identifier(Identifier::new(name.clone(), token.position)),
            TokenKind::Number(value) => Expr::Number(NumberLiteral::new(*value, token.position)),
            TokenKind::Type(_) | TokenKind::NewLine | TokenKind::EndOfFile => {
                return Err(ParseError::unknown_leaf(token));
            }
        };
        self.cursor.advance()?;
        Ok(expr)
    }
}

/// Parse an in-memory string labelled `<string>`.
///
/// # Errors
///
/// Returns the first lexical or syntax error encountered.
pub fn parse_str(source: &str) -> Result<TreeRoot<TList>, ParseError> {
    Parser::new(Tokenizer::from_str(source))?.parse()
}

#[cfg(test)]
mod tests;
