//! Support for checking program text against the grammar.

use std::io::ErrorKind;

pub use cursor::TokenCursor;
pub use parse::Recognizer;
pub use token::{
    LexPolicy, Lexer, LexerConfig, Location, MatchRule, Token, TokenKind, DEFAULT_OPERATORS,
};

mod cursor;
mod parse;
mod token;

#[cfg(test)]
mod parse_test;

/// Split the input into tokens with the default lexer:
/// strict about unknown characters, longest match, `^` included.
pub fn tokenize(input: &str) -> CheckResult<Vec<Token>> {
    Lexer::default().tokenize(input)
}

/// Check that the tokens form exactly one statement sequence, followed by end of input.
pub fn parse_program(tokens: &[Token]) -> CheckResult<()> {
    Recognizer::new(tokens).program()
}

/// Tokenize and check the input in one step.
pub fn check(input: &str) -> CheckResult<()> {
    check_with(&Lexer::default(), input)
}

/// Tokenize with the given lexer and check the input.
pub fn check_with(lexer: &Lexer, input: &str) -> CheckResult<()> {
    let tokens = lexer.tokenize(input)?;
    parse_program(&tokens)
}

/// The first error found in the input.
///
/// Errors are reported where they are detected and are never recovered from,
/// so there is at most one per check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// No token pattern matches at this location.
    Lex { location: Location, character: char },
    /// A required token was missing or different.
    UnexpectedToken {
        expected_kind: TokenKind,
        expected_text: Option<String>,
        found: Token,
    },
    /// The token cannot start a statement.
    InvalidStatement(Token),
    /// The token cannot start a factor.
    InvalidFactor(Token),
    /// The token cannot start a selector.
    InvalidSelector(Token),
    /// Tokens remain after a complete program.
    TrailingInput(Token),
}

impl SyntaxError {
    /// The offending token, if the error came from the recognizer.
    pub fn token(&self) -> Option<&Token> {
        match self {
            SyntaxError::Lex { .. } => None,
            SyntaxError::UnexpectedToken { found, .. } => Some(found),
            SyntaxError::InvalidStatement(t)
            | SyntaxError::InvalidFactor(t)
            | SyntaxError::InvalidSelector(t)
            | SyntaxError::TrailingInput(t) => Some(t),
        }
    }

    /// Where in the input the error was detected.
    pub fn location(&self) -> Location {
        match self {
            SyntaxError::Lex { location, .. } => *location,
            _ => self.token().map(|t| t.location).unwrap_or_default(),
        }
    }

    /// True if the input ended early, i.e. more input might make it valid.
    pub fn is_incomplete(&self) -> bool {
        self.token()
            .is_some_and(|t| t.kind == TokenKind::EndOfInput)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let location = self.location();
        match self {
            SyntaxError::Lex { character, .. } => {
                write!(f, "{location}: unrecognized character {character:?}")
            }
            SyntaxError::UnexpectedToken {
                expected_kind,
                expected_text: Some(text),
                found,
            } => write!(f, "{location}: expected {expected_kind}('{text}'), found {found}"),
            SyntaxError::UnexpectedToken {
                expected_kind,
                expected_text: None,
                found,
            } => write!(f, "{location}: expected {expected_kind}, found {found}"),
            SyntaxError::InvalidStatement(found) => {
                write!(f, "{location}: expected a statement, found {found}")
            }
            SyntaxError::InvalidFactor(found) => {
                write!(f, "{location}: expected a factor, found {found}")
            }
            SyntaxError::InvalidSelector(found) => {
                write!(f, "{location}: expected '^' or '[', found {found}")
            }
            SyntaxError::TrailingInput(found) => {
                write!(f, "{location}: expected end of input, found {found}")
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// The main result type for this module.
pub type CheckResult<T> = Result<T, SyntaxError>;

impl From<SyntaxError> for std::io::Error {
    fn from(value: SyntaxError) -> Self {
        let kind = if value.is_incomplete() {
            ErrorKind::UnexpectedEof
        } else {
            ErrorKind::InvalidInput
        };
        std::io::Error::new(kind, value.to_string())
    }
}
