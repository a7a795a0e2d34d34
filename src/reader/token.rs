//! Module for extracting tokens from program text.

use crate::reader::{CheckResult, SyntaxError};

/// Classification of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Decimal,
    String,
    Keyword,
    Operator,
    Identifier,
    EndOfInput,
}

impl TokenKind {
    /// Pattern kinds, in priority order.
    const PRIORITY: [TokenKind; 6] = [
        TokenKind::Number,
        TokenKind::Decimal,
        TokenKind::String,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::Identifier,
    ];
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::String => "STRING",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::EndOfInput => "EOF",
        };
        f.write_str(name)
    }
}

/// Position of a character in the input.
///
/// `offset` is a byte offset from 0; `line` and `column` are 1-indexed,
/// with columns counted in characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Location {
    fn default() -> Self {
        Location {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Location {
    /// The location reached after reading `s` from this location.
    pub(super) fn after(self, s: &str) -> Location {
        let mut next = self;
        next.offset += s.len();
        for ch in s.chars() {
            if ch == '\n' {
                next.line += 1;
                next.column = 1;
            } else {
                next.column += 1;
            }
        }
        next
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// A classified lexical unit.
///
/// Whitespace is never a token. `text` is `None` only for `EndOfInput`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            location,
        }
    }

    pub fn end_of_input(location: Location) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            text: None,
            location,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// True if this token's literal text is one of `candidates`.
    pub fn is_one_of(&self, candidates: &[&str]) -> bool {
        self.text().is_some_and(|t| candidates.contains(&t))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}('{}')", self.kind, text),
            None => f.write_str("end of input"),
        }
    }
}

/// What to do with a character that no pattern accepts.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LexPolicy {
    /// Fail with `SyntaxError::Lex`.
    #[default]
    Strict,
    /// Skip the character and keep going.
    Lenient,
}

/// How to choose between patterns that match at the same position.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// Keep the longest match; ties go to the higher-priority kind.
    #[default]
    LongestMatch,
    /// Take the first pattern, in priority order, that matches at all.
    ///
    /// Under this rule `3.14` lexes as `Number`, `Keyword(.)`, `Number`,
    /// since `Number` is tried before `Decimal`.
    FirstMatch,
}

/// Operators recognized by default, including the `^` pointer selector.
pub const DEFAULT_OPERATORS: &[&str] = &[
    ":-", "~", "<", ">", "=", "#", "+", "-", "&", "OR", "*", "/", "^", "AND",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    pub policy: LexPolicy,
    pub matching: MatchRule,
    pub operators: Vec<String>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            policy: LexPolicy::default(),
            matching: MatchRule::default(),
            operators: DEFAULT_OPERATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LexerConfig {
    pub fn with_policy(mut self, policy: LexPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_matching(mut self, matching: MatchRule) -> Self {
        self.matching = matching;
        self
    }

    /// The operator set without `^`.
    pub fn without_caret(mut self) -> Self {
        self.operators.retain(|op| op != "^");
        self
    }
}

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn space() -> &'static Regex {
        static SPACE: OnceLock<Regex> = OnceLock::new();
        SPACE.get_or_init(|| Regex::new(r"\A\s+").expect("could not compile regex for space"))
    }

    pub(super) fn number() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[+-]?[0-9]+").expect("could not compile regex for number")
        })
    }

    pub(super) fn decimal() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[+-]?[0-9]+\.[0-9]+").expect("could not compile regex for decimal")
        })
    }

    pub(super) fn string() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        // No escapes: the string runs to the next quote.
        MATCH.get_or_init(|| Regex::new(r#"\A"[^"]*""#).expect("could not compile regex for string"))
    }

    pub(super) fn keyword() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A(?:PRINT|\.|\[|\]|\(|\)|;)").expect("could not compile regex for keyword")
        })
    }

    pub(super) fn identifier() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[a-zA-Z][a-zA-Z0-9]*").expect("could not compile regex for identifier")
        })
    }

    /// Build a matcher for a set of literal operators.
    /// Longer operators are listed first, so the alternation prefers them.
    /// Returns None if there are no (non-empty) operators.
    pub(super) fn operators(operators: &[String]) -> Option<Regex> {
        let mut literals: Vec<&str> = operators
            .iter()
            .map(String::as_str)
            .filter(|op| !op.is_empty())
            .collect();
        if literals.is_empty() {
            return None;
        }
        literals.sort_by_key(|op| std::cmp::Reverse(op.len()));
        let alternation = literals
            .iter()
            .map(|op| ::regex::escape(op))
            .collect::<Vec<_>>()
            .join("|");
        Some(
            Regex::new(&format!(r"\A(?:{alternation})"))
                .expect("could not compile regex for escaped operators"),
        )
    }
}

/// A tokenizer with a fixed configuration.
///
/// A `Lexer` holds no per-input state and can be reused for any number of inputs.
#[derive(Debug, Clone)]
pub struct Lexer {
    config: LexerConfig,
    operators: Option<::regex::Regex>,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new(LexerConfig::default())
    }
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Self {
        let operators = regex::operators(&config.operators);
        Lexer { config, operators }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Split the input into its constituent tokens.
    ///
    /// The result always ends with exactly one `EndOfInput` token.
    pub fn tokenize(&self, input: &str) -> CheckResult<Vec<Token>> {
        let mut result = Vec::new();
        let mut location = Location::default();

        while location.offset < input.len() {
            let rest = &input[location.offset..];

            if let Some(space) = nonempty(regex::space().find(rest).map(|m| m.as_str())) {
                location = location.after(space);
                continue;
            }

            match self.next_token(rest) {
                Some((kind, text)) => {
                    tracing::trace!("{} {:?} at {}", kind, text, location);
                    result.push(Token::new(kind, text, location));
                    location = location.after(text);
                }
                None => {
                    // Not empty: the loop condition guarantees a character remains.
                    let Some(character) = rest.chars().next() else {
                        break;
                    };
                    match self.config.policy {
                        LexPolicy::Strict => {
                            return Err(SyntaxError::Lex {
                                location,
                                character,
                            })
                        }
                        LexPolicy::Lenient => {
                            tracing::debug!("skipping unrecognized {:?} at {}", character, location);
                            location = location.after(&rest[..character.len_utf8()]);
                        }
                    }
                }
            }
        }

        result.push(Token::end_of_input(location));
        Ok(result)
    }

    /// Text matched by the pattern for `kind` at the start of `rest`, if any.
    fn find<'s>(&self, kind: TokenKind, rest: &'s str) -> Option<&'s str> {
        let found = match kind {
            TokenKind::Number => regex::number().find(rest),
            TokenKind::Decimal => regex::decimal().find(rest),
            TokenKind::String => regex::string().find(rest),
            TokenKind::Keyword => regex::keyword().find(rest),
            TokenKind::Operator => self.operators.as_ref()?.find(rest),
            TokenKind::Identifier => regex::identifier().find(rest),
            TokenKind::EndOfInput => None,
        };
        nonempty(found.map(|m| m.as_str()))
    }

    /// Select the token at the start of `rest` according to the matching rule.
    fn next_token<'s>(&self, rest: &'s str) -> Option<(TokenKind, &'s str)> {
        let mut candidates = TokenKind::PRIORITY
            .into_iter()
            .filter_map(|kind| self.find(kind, rest).map(|text| (kind, text)));

        match self.config.matching {
            MatchRule::FirstMatch => candidates.next(),
            MatchRule::LongestMatch => candidates.fold(None, |best, (kind, text)| match best {
                // Strictly longer only: earlier (higher-priority) kinds win ties.
                Some((_, best_text)) if text.len() <= best_text.len() => best,
                _ => Some((kind, text)),
            }),
        }
    }
}

fn nonempty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
