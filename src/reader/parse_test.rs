//! Tests for whole programs: lexer and recognizer together.
use super::*;

fn check_lenient(input: &str) -> CheckResult<()> {
    check_with(
        &Lexer::new(LexerConfig::default().with_policy(LexPolicy::Lenient)),
        input,
    )
}

#[test]
fn accepts_assignment() -> CheckResult<()> {
    parse_program(&tokenize("x :- 1 .")?)
}

#[test]
fn accepts_several_statements() -> CheckResult<()> {
    check(
        r#"
        x :- 1 .
        y :- "hello" .
        PRINT ( x + y ) .
        z :- ( x < y ) .
        "#,
    )
}

#[test]
fn rejects_missing_terminator() {
    match check("x :- 1") {
        Err(SyntaxError::UnexpectedToken {
            expected_kind: TokenKind::Keyword,
            expected_text: Some(text),
            found,
        }) => {
            assert_eq!(text, ".");
            assert_eq!(found.kind, TokenKind::EndOfInput);
        }
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn accepts_pointer_selector_chain() -> CheckResult<()> {
    check("p ^ next ^ data :- alpha .")
}

#[test]
fn accepts_array_selector_with_expression() -> CheckResult<()> {
    check("a [ i + 1 ] :- 2 .")?;
    check("a [ i ] [ j ] ^ k :- i * 2 .")
}

#[test]
fn rejects_assignment_inside_array_selector() {
    match check("a [ :- 2 .") {
        Err(SyntaxError::InvalidFactor(token)) => {
            assert_eq!(token.kind, TokenKind::Operator);
            assert_eq!(token.text(), Some(":-"));
            assert_eq!(token.location.column, 5);
        }
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn rejects_pointer_selector_without_identifier() {
    match check("p ^ 3 :- 1 .") {
        Err(SyntaxError::UnexpectedToken {
            expected_kind: TokenKind::Identifier,
            expected_text: None,
            found,
        }) => assert_eq!(found.text(), Some("3")),
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn accepts_print_statement() -> CheckResult<()> {
    check("PRINT ( c ) .")
}

#[test]
fn rejects_print_without_parenthesis() {
    match check("PRINT c ) .") {
        Err(SyntaxError::UnexpectedToken {
            expected_kind: TokenKind::Keyword,
            expected_text: Some(text),
            found,
        }) => {
            assert_eq!(text, "(");
            assert_eq!(found.text(), Some("c"));
        }
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn precedence_is_only_structure() -> CheckResult<()> {
    check("x :- 1 + 2 * 3 .")?;
    check("x :- 1 / 0 .")?;
    check("x :- a AND b OR ~ c & d .")?;
    check("x :- ( 1 + 2 ) * 3 # 9 .")
}

#[test]
fn at_most_one_relation() {
    check("x :- a < b .").unwrap();
    match check("x :- a < b < c .") {
        Err(SyntaxError::UnexpectedToken { found, .. }) => assert_eq!(found.text(), Some("<")),
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn negation_nests() -> CheckResult<()> {
    check("x :- ~ ~ ~ y .")?;
    check("x :- ~ ( a = b ) .")
}

#[test]
fn rejects_dangling_operator() {
    match check("x :- 1 + .") {
        Err(SyntaxError::InvalidFactor(token)) => assert_eq!(token.text(), Some(".")),
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn rejects_unbalanced_parentheses() {
    match check("x :- ( 1 + 2 .") {
        Err(SyntaxError::UnexpectedToken {
            expected_text: Some(text),
            found,
            ..
        }) => {
            assert_eq!(text, ")");
            assert_eq!(found.text(), Some("."));
        }
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn rejects_statement_starting_with_literal() {
    match check("1 :- x .") {
        Err(SyntaxError::InvalidStatement(token)) => {
            assert_eq!(token.kind, TokenKind::Number)
        }
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn rejects_empty_program() {
    for input in ["", "  \n "] {
        match check(input) {
            Err(SyntaxError::InvalidStatement(token)) => {
                assert_eq!(token.kind, TokenKind::EndOfInput)
            }
            v => panic!("unexpected check result for {:?}: {:?}", input, v),
        }
    }
}

#[test]
fn only_first_error_is_reported() {
    match check("x :- ] . y :- [ .") {
        Err(SyntaxError::InvalidFactor(token)) => assert_eq!(token.location.column, 6),
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn decimal_is_accepted_with_longest_match() -> CheckResult<()> {
    let tokens = tokenize("x :- 3.14 .")?;
    assert_eq!(tokens[2].kind, TokenKind::Decimal);
    assert_eq!(tokens[2].text(), Some("3.14"));
    parse_program(&tokens)
}

#[test]
fn decimal_is_rejected_with_first_match() -> CheckResult<()> {
    let lexer = Lexer::new(LexerConfig::default().with_matching(MatchRule::FirstMatch));
    let tokens = lexer.tokenize("x :- 3.14 .")?;
    let texts: Vec<_> = tokens.iter().filter_map(Token::text).collect();
    assert_eq!(texts, ["x", ":-", "3", ".", "14", "."]);

    // `x :- 3 .` is a complete statement; `14` cannot start the next one.
    match parse_program(&tokens) {
        Err(SyntaxError::InvalidStatement(token)) => {
            assert_eq!(token.kind, TokenKind::Number);
            assert_eq!(token.text(), Some("14"));
        }
        v => panic!("unexpected parse result: {:?}", v),
    }
    Ok(())
}

#[test]
fn tokenize_twice_gives_same_tokens() -> CheckResult<()> {
    let input = "p ^ next :- \"s\" . PRINT ( p ^ next ) .";
    let first = tokenize(input)?;
    let second = tokenize(input)?;
    assert_eq!(first, second);
    parse_program(&first)?;
    parse_program(&first)
}

#[test]
fn rejects_tokens_after_end_of_input() -> CheckResult<()> {
    let mut tokens = tokenize("x :- 1 .")?;
    tokens.extend(tokenize("y :- 2 .")?);

    match parse_program(&tokens) {
        Err(SyntaxError::TrailingInput(token)) => {
            assert_eq!(token.kind, TokenKind::Identifier);
            assert_eq!(token.text(), Some("y"));
        }
        v => panic!("unexpected parse result: {:?}", v),
    }
    Ok(())
}

#[test]
fn parses_do_not_interfere() {
    let good = tokenize("x :- 1 .").unwrap();
    let bad = tokenize("x :- 1").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let tokens = if i % 2 == 0 { good.clone() } else { bad.clone() };
            std::thread::spawn(move || parse_program(&tokens).is_ok())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), i % 2 == 0, "parse {}", i);
    }
}

#[test]
fn strict_rejects_unknown_character() {
    match check("x :- 1 @ .") {
        Err(SyntaxError::Lex {
            location,
            character,
        }) => {
            assert_eq!(character, '@');
            assert_eq!(location.column, 8);
        }
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn lenient_ignores_unknown_character() -> CheckResult<()> {
    check_lenient("x :- 1 @ .")?;
    check_lenient("{ PRINT ( x ) . }")
}

#[test]
fn lenient_still_reports_syntax_errors() {
    match check_lenient("x :- @ .") {
        Err(SyntaxError::InvalidFactor(token)) => assert_eq!(token.text(), Some(".")),
        v => panic!("unexpected check result: {:?}", v),
    }
}

#[test]
fn pointer_selector_needs_caret_operator() {
    let lexer = Lexer::new(
        LexerConfig::default()
            .with_policy(LexPolicy::Lenient)
            .without_caret(),
    );
    // Without `^`, the selector is skipped and `next` follows `p` directly.
    match check_with(&lexer, "p ^ next :- 1 .") {
        Err(SyntaxError::UnexpectedToken {
            expected_text: Some(text),
            found,
            ..
        }) => {
            assert_eq!(text, ":-");
            assert_eq!(found.text(), Some("next"));
        }
        v => panic!("unexpected check result: {:?}", v),
    }
}
