use super::*;
use pretty_assertions::assert_eq;
use uwu_ir::SourcePosition;

fn parse_ok(source: &str) -> TreeRoot<TList> {
    parse_str(source).unwrap_or_else(|e| panic!("unexpected parse error: {e}"))
}

fn ident(name: &str, line: u32, column: u32, index: u32) -> Expr {
    Expr::Identifier(Identifier::new(name, SourcePosition::new(line, column, index)))
}

#[test]
fn test_blank_input_is_empty() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("\n").is_empty());
    assert!(parse_ok("\n\n  \n\t\n").is_empty());
}

#[test]
fn test_one_list_per_line() {
    let tree = parse_ok("O.O @_@\n:v @_@ 2\nUwU @_@\n");
    assert_eq!(tree.len(), 3);
    assert_eq!(
        tree.children[0],
        TList::new(vec![ident("O.O", 0, 0, 0), ident("@_@", 0, 4, 4)])
    );
    assert_eq!(
        tree.children[1],
        TList::new(vec![
            ident(":v", 1, 0, 8),
            ident("@_@", 1, 3, 11),
            Expr::Number(NumberLiteral::new(2.0, SourcePosition::new(1, 7, 15))),
        ])
    );
    assert_eq!(tree.children[2].children.len(), 2);
}

#[test]
fn test_blank_lines_between_lists() {
    let tree = parse_ok("\n\nUwU a\n\n\nUwU b\n");
    let heads: Vec<_> = tree
        .iter()
        .filter_map(|list| list.children.get(1))
        .filter_map(Expr::as_identifier)
        .map(|id| id.name.as_str())
        .collect();
    assert_eq!(heads, vec!["a", "b"]);
}

#[test]
fn test_leading_number_is_rejected() {
    let err = parse_str("5 UwU\n").err();
    assert!(
        matches!(
            err,
            Some(ParseError::UnexpectedToken {
                expected: TokenTag::Name,
                found: TokenTag::Number,
                ..
            })
        ),
        "got {err:?}"
    );
}

#[test]
fn test_missing_trailing_newline() {
    let err = parse_str("UwU x").err();
    assert!(
        matches!(
            err,
            Some(ParseError::ExpectedNewline {
                found: TokenTag::EndOfFile,
                ..
            })
        ),
        "got {err:?}"
    );
}

#[test]
fn test_lex_error_surfaces_through_parser() {
    let err = parse_str("UwU $\n").err();
    assert!(matches!(err, Some(ParseError::Lex(_))), "got {err:?}");
}

#[test]
fn test_lex_error_on_first_token() {
    let err = Parser::new(Tokenizer::from_str("#")).err();
    assert!(matches!(err, Some(ParseError::Lex(_))), "got {err:?}");
}

#[test]
fn test_cursor_tracks_last_token() {
    let parser = Parser::new(Tokenizer::from_str("UwU x\n"));
    let Ok(mut parser) = parser else {
        panic!("first token should lex");
    };
    assert_eq!(parser.current().tag(), TokenTag::Name);
    assert!(parser.last().is_none());

    let tree = parser.parse().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(tree.len(), 1);
    assert_eq!(parser.current().tag(), TokenTag::EndOfFile);
    assert_eq!(parser.last().map(Token::tag), Some(TokenTag::EndOfFile));
}

#[test]
fn test_numbers_as_arguments() {
    let tree = parse_ok("UwU 1 2.5 3_000\n");
    let values: Vec<f64> = tree.children[0]
        .children
        .iter()
        .filter_map(|e| match e {
            Expr::Number(n) => Some(n.value),
            Expr::Identifier(_) => None,
        })
        .collect();
    assert_eq!(values, vec![1.0, 2.5, 3000.0]);
}
