//! One-token cursor over a lazy token stream.

use uwu_ir::{Token, TokenTag};
use uwu_lexer::{LexError, Tokenizer};

/// Holds the current token and the one consumed before it.
///
/// The cursor never looks further ahead than `current`; tokens are pulled
/// from the tokenizer one at a time by [`advance`](Self::advance).
pub(crate) struct Cursor<I: Iterator<Item = char>> {
    tokenizer: Tokenizer<I>,
    current: Token,
    last: Option<Token>,
}

impl<I: Iterator<Item = char>> Cursor<I> {
    /// Prime the cursor with the first token.
    pub fn new(mut tokenizer: Tokenizer<I>) -> Result<Self, LexError> {
        let current = tokenizer.next_token()?;
        Ok(Cursor {
            tokenizer,
            current,
            last: None,
        })
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.last.as_ref()
    }

    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        self.current.tag() == tag
    }

    /// Consume the current token and read the next one.
    ///
    /// Once `EndOfFile` is current, advancing keeps it current.
    pub fn advance(&mut self) -> Result<(), LexError> {
        let next = self.tokenizer.next_token()?;
        self.last = Some(std::mem::replace(&mut self.current, next));
        Ok(())
    }
}
