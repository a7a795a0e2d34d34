//! Recursive-descent recognizer.
//!
//! Each nonterminal of the grammar has a method of the same name.
//! A method consumes the tokens of its production or returns the first error it finds;
//! nothing is built along the way.
//!
//! ```text
//! Program           → StatementSequence EndOfInput
//! StatementSequence → Statement { Statement }
//! Statement         → Assignment | PrintStatement
//! Assignment        → Designator ":-" Expression "."
//! PrintStatement    → "PRINT" "(" Expression ")" "."
//! Designator        → Identifier { Selector }
//! Selector          → "^" Identifier | "[" Expression "]"
//! Expression        → SimpleExpression [ Relation SimpleExpression ]
//! Relation          → "<" | ">" | "=" | "#"
//! SimpleExpression  → Term { AddOperator Term }
//! AddOperator       → "+" | "-" | "OR" | "&"
//! Term              → Factor { MulOperator Factor }
//! MulOperator       → "*" | "/" | "AND"
//! Factor            → Number | Decimal | String | Identifier
//!                   | "(" Expression ")"
//!                   | "~" Factor
//! ```

use crate::reader::cursor::TokenCursor;
use crate::reader::token::{Token, TokenKind};
use crate::reader::{CheckResult, SyntaxError};

const SELECTORS: &[&str] = &["^", "["];
const RELATIONS: &[&str] = &["<", ">", "=", "#"];
const ADD_OPERATORS: &[&str] = &["+", "-", "OR", "&"];
const MUL_OPERATORS: &[&str] = &["*", "/", "AND"];

/// Parser state for a single parse.
pub struct Recognizer<'t> {
    cursor: TokenCursor<'t>,
}

impl<'t> Recognizer<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Recognizer {
            cursor: TokenCursor::new(tokens),
        }
    }

    /// Program → StatementSequence EndOfInput
    pub fn program(mut self) -> CheckResult<()> {
        self.statement_sequence()?;
        if self.cursor.peek().kind != TokenKind::EndOfInput {
            return Err(SyntaxError::TrailingInput(self.cursor.peek().clone()));
        }
        // Nothing may follow the end marker.
        self.cursor.advance();
        if !self.cursor.is_exhausted() {
            return Err(SyntaxError::TrailingInput(self.cursor.peek().clone()));
        }
        tracing::debug!("accepted {} tokens", self.cursor.position());
        Ok(())
    }

    /// StatementSequence → Statement { Statement }
    fn statement_sequence(&mut self) -> CheckResult<()> {
        // Every statement consumes at least one token, so this terminates.
        self.statement()?;
        while self.cursor.peek().kind != TokenKind::EndOfInput {
            self.statement()?;
        }
        Ok(())
    }

    /// Statement → Assignment | PrintStatement
    fn statement(&mut self) -> CheckResult<()> {
        let token = self.cursor.peek();
        tracing::trace!("statement starting with {}", token);
        match token.kind {
            TokenKind::Identifier => self.assignment(),
            TokenKind::Keyword if token.text() == Some("PRINT") => self.print_statement(),
            _ => Err(SyntaxError::InvalidStatement(token.clone())),
        }
    }

    /// Assignment → Designator ":-" Expression "."
    fn assignment(&mut self) -> CheckResult<()> {
        self.designator()?;
        self.cursor.expect(TokenKind::Operator, Some(":-"))?;
        self.expression()?;
        self.cursor.expect(TokenKind::Keyword, Some("."))
    }

    /// PrintStatement → "PRINT" "(" Expression ")" "."
    fn print_statement(&mut self) -> CheckResult<()> {
        self.cursor.expect(TokenKind::Keyword, Some("PRINT"))?;
        self.cursor.expect(TokenKind::Keyword, Some("("))?;
        self.expression()?;
        self.cursor.expect(TokenKind::Keyword, Some(")"))?;
        self.cursor.expect(TokenKind::Keyword, Some("."))
    }

    /// Designator → Identifier { Selector }
    fn designator(&mut self) -> CheckResult<()> {
        self.cursor.expect(TokenKind::Identifier, None)?;
        while self.cursor.peek().is_one_of(SELECTORS) {
            self.selector()?;
        }
        Ok(())
    }

    /// Selector → "^" Identifier | "[" Expression "]"
    fn selector(&mut self) -> CheckResult<()> {
        match self.cursor.peek().text() {
            Some("^") => {
                self.cursor.advance();
                self.cursor.expect(TokenKind::Identifier, None)
            }
            Some("[") => {
                self.cursor.advance();
                self.expression()?;
                self.cursor.expect(TokenKind::Keyword, Some("]"))
            }
            _ => Err(SyntaxError::InvalidSelector(self.cursor.peek().clone())),
        }
    }

    /// Expression → SimpleExpression [ Relation SimpleExpression ]
    fn expression(&mut self) -> CheckResult<()> {
        self.simple_expression()?;
        if self.cursor.peek().is_one_of(RELATIONS) {
            self.relation()?;
            self.simple_expression()?;
        }
        Ok(())
    }

    fn relation(&mut self) -> CheckResult<()> {
        self.operator(RELATIONS)
    }

    /// SimpleExpression → Term { AddOperator Term }
    fn simple_expression(&mut self) -> CheckResult<()> {
        self.term()?;
        while self.cursor.peek().is_one_of(ADD_OPERATORS) {
            self.add_operator()?;
            self.term()?;
        }
        Ok(())
    }

    fn add_operator(&mut self) -> CheckResult<()> {
        self.operator(ADD_OPERATORS)
    }

    /// Term → Factor { MulOperator Factor }
    fn term(&mut self) -> CheckResult<()> {
        self.factor()?;
        while self.cursor.peek().is_one_of(MUL_OPERATORS) {
            self.mul_operator()?;
            self.factor()?;
        }
        Ok(())
    }

    fn mul_operator(&mut self) -> CheckResult<()> {
        self.operator(MUL_OPERATORS)
    }

    /// Factor → Number | Decimal | String | Identifier | "(" Expression ")" | "~" Factor
    fn factor(&mut self) -> CheckResult<()> {
        let token = self.cursor.peek();
        match (token.kind, token.text()) {
            (
                TokenKind::Number | TokenKind::Decimal | TokenKind::String | TokenKind::Identifier,
                _,
            ) => {
                self.cursor.advance();
                Ok(())
            }
            (TokenKind::Keyword, Some("(")) => {
                self.cursor.advance();
                self.expression()?;
                self.cursor.expect(TokenKind::Keyword, Some(")"))
            }
            (TokenKind::Operator, Some("~")) => {
                self.cursor.advance();
                self.factor()
            }
            _ => Err(SyntaxError::InvalidFactor(token.clone())),
        }
    }

    /// Consume one operator out of `choices`.
    fn operator(&mut self, choices: &[&str]) -> CheckResult<()> {
        let token = self.cursor.peek();
        match token.text() {
            Some(text) if token.kind == TokenKind::Operator && choices.contains(&text) => {
                self.cursor.advance();
                Ok(())
            }
            _ => Err(SyntaxError::UnexpectedToken {
                expected_kind: TokenKind::Operator,
                expected_text: Some(choices.join(" ")),
                found: token.clone(),
            }),
        }
    }
}
