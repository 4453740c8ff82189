use super::*;
use pretty_assertions::assert_eq;

fn label() -> Arc<SourceLabel> {
    Arc::new(SourceLabel::new(Some("demo.uwu".to_string()), None))
}

#[test]
fn test_display_names_unit_and_position() {
    let err = LexError::unknown_character('$', SourcePosition::new(1, 4, 12), label());
    assert_eq!(
        err.to_string(),
        "in demo.uwu at char 12 [2:5] unknown token '$'"
    );
}

#[test]
fn test_codes() {
    let unknown = LexError::unknown_character('$', SourcePosition::START, label());
    let decimal = LexError::expected_decimal_digit(Some('x'), SourcePosition::START, label());
    assert_eq!(unknown.code(), ErrorCode::E0001);
    assert_eq!(decimal.code(), ErrorCode::E0002);
}

#[test]
fn test_decimal_at_end_of_input() {
    let err = LexError::expected_decimal_digit(None, SourcePosition::new(0, 2, 2), label());
    assert!(err.to_string().ends_with("found end of input"));

    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.labels[0].len, 0);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_unknown_character_diagnostic() {
    let err = LexError::unknown_character('#', SourcePosition::new(0, 3, 3), label());
    let diag = err.to_diagnostic();
    assert_eq!(diag.message, "unknown token '#'");
    assert_eq!(diag.primary_position(), Some(SourcePosition::new(0, 3, 3)));
    assert_eq!(diag.notes.len(), 1);
}
