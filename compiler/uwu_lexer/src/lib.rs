//! Tokenizer for UwU source text.
//!
//! Pulls characters lazily from any `Iterator<Item = char>` and produces
//! [`Token`]s on demand. The tokenizer can push back at most one character
//! (the lookahead that terminated a name or number), and it remembers the
//! last token it produced so runs of blank lines collapse into a single
//! [`TokenKind::NewLine`].
//!
//! Lexing stops at the first error; there is no recovery.

mod lex_error;

use std::str::Chars;
use std::sync::Arc;

use tracing::{debug, trace};
use uwu_ir::{SourceLabel, SourcePosition, Token, TokenKind, TokenTag};

pub use lex_error::{LexError, LexErrorKind};

/// Punctuation allowed anywhere in a name, including its first character.
const NAME_PUNCTUATION: &[char] = &['_', '!', '.', '@', '/', '\\', '~', ':'];

/// Digit group separator inside numbers. Stripped before conversion.
const DIGIT_SEPARATOR: char = '_';

#[inline]
fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || NAME_PUNCTUATION.contains(&c)
}

/// Any digit may continue a name, not only ASCII ones.
#[inline]
fn is_name_continue(c: char) -> bool {
    is_name_start(c) || c.is_numeric()
}

#[inline]
fn is_digit_or_separator(c: char) -> bool {
    c.is_ascii_digit() || c == DIGIT_SEPARATOR
}

/// Lazy tokenizer over a character source.
///
/// Call [`next_token`](Self::next_token) repeatedly; once the source is
/// exhausted every further call yields another `EndOfFile` token. As an
/// [`Iterator`] it yields through the first `EndOfFile` (or the first error)
/// and then stops.
pub struct Tokenizer<I: Iterator<Item = char>> {
    source: I,
    label: Arc<SourceLabel>,
    /// Cursor: position of the next character pulled from `source`.
    cursor: SourcePosition,
    /// Position of the most recently fetched character.
    current_char_position: SourcePosition,
    /// Single-slot pushback buffer.
    rescued: Option<(char, SourcePosition)>,
    last_token: Option<Token>,
    finished: bool,
}

impl<'a> Tokenizer<Chars<'a>> {
    /// Tokenize an in-memory string labelled `<string>`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &'a str) -> Self {
        Tokenizer::new(source.chars(), SourceLabel::string())
    }
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(source: I, label: SourceLabel) -> Self {
        Tokenizer {
            source,
            label: Arc::new(label),
            cursor: SourcePosition::START,
            current_char_position: SourcePosition::START,
            rescued: None,
            last_token: None,
            finished: false,
        }
    }

    /// Label shared by every token of this unit.
    pub fn label(&self) -> &Arc<SourceLabel> {
        &self.label
    }

    /// Position of the next character that will be read.
    pub fn position(&self) -> SourcePosition {
        match self.rescued {
            Some((_, position)) => position,
            None => self.cursor,
        }
    }

    /// The most recently produced token, if any.
    pub fn last_token(&self) -> Option<&Token> {
        self.last_token.as_ref()
    }

    /// Whether the most recently produced token has the given tag.
    ///
    /// Always `false` before the first token.
    pub fn is_last_token(&self, tag: TokenTag) -> bool {
        self.last_token.as_ref().is_some_and(|t| t.tag() == tag)
    }

    /// Produce the next token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for a character that cannot start a token, or
    /// for a decimal point that is not followed by a digit or `_`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let Some(c) = self.next_char() else {
                let token = self.make_token(TokenKind::EndOfFile, self.cursor, 0);
                return Ok(token);
            };
            let start = self.current_char_position;

            match c {
                '\n' => {
                    if !self.is_last_token(TokenTag::NewLine) {
                        return Ok(self.make_token(TokenKind::NewLine, start, 1));
                    }
                }
                ' ' | '\t' => {}
                c if is_name_start(c) => return Ok(self.name(c, start)),
                c if c.is_ascii_digit() => return self.number(c, start),
                c => {
                    debug!(found = ?c, position = %start, "unknown character");
                    return Err(LexError::unknown_character(
                        c,
                        start,
                        Arc::clone(&self.label),
                    ));
                }
            }
        }
    }

    /// Fetch a character, preferring the rescued one.
    fn next_char(&mut self) -> Option<char> {
        if let Some((c, position)) = self.rescued.take() {
            self.current_char_position = position;
            return Some(c);
        }

        let c = self.source.next()?;
        self.current_char_position = self.cursor;
        self.cursor.index += 1;
        if c == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 0;
        } else {
            self.cursor.column += 1;
        }
        Some(c)
    }

    /// Push the current character back so the next fetch returns it again.
    fn rescue(&mut self, c: char) {
        debug_assert!(self.rescued.is_none(), "rescue buffer holds one character");
        self.rescued = Some((c, self.current_char_position));
    }

    fn make_token(&mut self, kind: TokenKind, start: SourcePosition, span: u32) -> Token {
        let token = Token::new(kind, start, span, Arc::clone(&self.label));
        trace!(token = %token, "token");
        self.last_token = Some(token.clone());
        token
    }

    /// Length from `start` to the next unread character.
    fn span_from(&self, start: SourcePosition) -> u32 {
        self.position().index - start.index
    }

    fn name(&mut self, first: char, start: SourcePosition) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.next_char() {
            if is_name_continue(c) {
                text.push(c);
            } else {
                self.rescue(c);
                break;
            }
        }
        let span = self.span_from(start);
        self.make_token(TokenKind::Name(text), start, span)
    }

    /// Append digits and separators to `text`, returning the first character
    /// that is neither (or `None` at end of input).
    fn digit_run(&mut self, text: &mut String) -> Option<char> {
        loop {
            let c = self.next_char()?;
            if c.is_ascii_digit() {
                text.push(c);
            } else if c != DIGIT_SEPARATOR {
                return Some(c);
            }
        }
    }

    fn number(&mut self, first: char, start: SourcePosition) -> Result<Token, LexError> {
        let mut text = String::from(first);
        let mut stop = self.digit_run(&mut text);

        if stop == Some('.') {
            text.push('.');
            match self.next_char() {
                Some(c) if is_digit_or_separator(c) => {
                    if c != DIGIT_SEPARATOR {
                        text.push(c);
                    }
                    stop = self.digit_run(&mut text);
                }
                found => {
                    let position = match found {
                        Some(_) => self.current_char_position,
                        None => self.cursor,
                    };
                    debug!(?found, position = %position, "malformed decimal");
                    return Err(LexError::expected_decimal_digit(
                        found,
                        position,
                        Arc::clone(&self.label),
                    ));
                }
            }
        }

        if let Some(c) = stop {
            self.rescue(c);
        }

        // `text` is digits with at most one interior or trailing point, which
        // always parses; a trailing point (`1._`) reads as `1.0`.
        let value = text.parse::<f64>().map_err(|_| {
            LexError::expected_decimal_digit(None, start, Arc::clone(&self.label))
        })?;
        let span = self.span_from(start);
        Ok(self.make_token(TokenKind::Number(value), start, span))
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.tag() == TokenTag::EndOfFile,
            Err(_) => true,
        };
        Some(result)
    }
}

/// Tokenize a whole string, up to and including the `EndOfFile` token.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
pub fn tokenize(source: &str, label: SourceLabel) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source.chars(), label).collect()
}
