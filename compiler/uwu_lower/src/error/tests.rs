use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_codes_are_semantic() {
    let at = SourcePosition::new(0, 0, 0);
    let errors = [
        LowerError::EmptyList,
        LowerError::NotAnIdentifier {
            found: "number `5`".to_string(),
            position: at,
        },
        LowerError::UnknownKeyword {
            name: "nya".to_string(),
            position: at,
        },
        LowerError::DeclarationArity {
            found: 2,
            position: at,
        },
        LowerError::DeclarationTarget {
            found: "number `1`".to_string(),
            position: at,
        },
    ];
    for err in &errors {
        assert!(err.code().is_semantic_error(), "{err}");
        assert_eq!(err.to_diagnostic().code, err.code());
    }
    assert_eq!(errors[0].position(), None);
    assert_eq!(errors[1].position(), Some(at));
}

#[test]
fn test_unknown_keyword_lists_alternatives() {
    let err = LowerError::UnknownKeyword {
        name: "nya".to_string(),
        position: SourcePosition::new(2, 0, 30),
    };
    assert_eq!(
        err.to_string(),
        "at 3:1: `nya` cannot become a recognized construct"
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.labels[0].len, 3);
    assert_eq!(diag.notes, vec!["expected one of `UwU`, `O.O`, `:v`".to_string()]);
}
