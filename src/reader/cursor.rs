//! Single-token lookahead over a token sequence.

use crate::reader::token::{Token, TokenKind};
use crate::reader::{CheckResult, SyntaxError};

/// A forward-only view over a token sequence.
///
/// Past the last token, `peek` yields an `EndOfInput` token; so an input that
/// lacks its trailing `EndOfInput` still reads as terminated.
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    index: usize,
    end: Token,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        let end_location = tokens
            .last()
            .map(|t| match t.text() {
                Some(text) => t.location.after(text),
                None => t.location,
            })
            .unwrap_or_default();
        TokenCursor {
            tokens,
            index: 0,
            end: Token::end_of_input(end_location),
        }
    }

    /// The current token. Never consumes.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.end)
    }

    /// Move past the current token. A no-op once the sequence is exhausted.
    pub fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Consume the current token if it has the given kind (and text, if provided).
    pub fn expect(&mut self, kind: TokenKind, text: Option<&str>) -> CheckResult<()> {
        let found = self.peek();
        let text_matches = text.map_or(true, |want| found.text() == Some(want));
        if found.kind != kind || !text_matches {
            return Err(SyntaxError::UnexpectedToken {
                expected_kind: kind,
                expected_text: text.map(str::to_owned),
                found: found.clone(),
            });
        }
        self.advance();
        Ok(())
    }

    /// True once every token, including any end marker, has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.index
    }
}
