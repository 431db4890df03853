//! Whitespace-token lexer over an immutable message buffer
//!
//! A token is the maximal run of non-space characters at the cursor. Tokens
//! borrow from the message; nothing is copied until a token is materialized
//! by the argument builder.

use std::fmt;

/// A borrowed view of one whitespace-delimited token.
///
/// A token never crosses a space boundary. An empty token signals end of
/// input or a missing value; callers must check before consuming further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
}

impl<'a> Token<'a> {
    /// The token text as a borrowed slice of the message
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True for the empty token (end of input / missing value)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Forward-only cursor producing a lazy, finite sequence of tokens.
///
/// Not restartable: re-create the tokenizer to scan a message again.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { rest: message }
    }

    /// Extract the next token.
    ///
    /// After extraction the cursor advances past exactly one trailing space
    /// if present; at end of input it stays put and the empty token is
    /// returned. Consecutive spaces therefore yield empty tokens, matching
    /// the one-space delimiter of the message grammar.
    pub fn next_token(&mut self) -> Token<'a> {
        let end = self.rest.find(' ').unwrap_or(self.rest.len());
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest.strip_prefix(' ').unwrap_or(rest);
        Token { text }
    }

    /// The unconsumed remainder of the message
    pub fn remainder(&self) -> &'a str {
        self.rest
    }

    /// True once every token has been extracted
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.next_token())
        }
    }
}
