use super::*;
use pretty_assertions::assert_eq;
use uwu_ir::{Identifier, NumberLiteral, SourcePosition, StxTag, TypeTag};
use uwu_parse::parse_str;

fn lower_str(source: &str) -> Result<TreeRoot<Node>, LowerError> {
    let tree = parse_str(source).unwrap_or_else(|e| panic!("unexpected parse error: {e}"));
    lower(&tree)
}

fn at(line: u32, column: u32, index: u32) -> SourcePosition {
    SourcePosition::new(line, column, index)
}

#[test]
fn test_program_lowers_to_three_nodes() {
    let ir = lower_str("O.O @_@\n:v @_@ 2\nUwU @_@\n").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        ir.children,
        vec![
            Node::Decl(Decl {
                declared_type: TypeTag::Int,
                variable: Identifier::new("@_@", at(0, 4, 4)),
            }),
            Node::Stx(ExtendedStatement {
                name: StxTag::Sum,
                arguments: vec![
                    Expr::Identifier(Identifier::new("@_@", at(1, 3, 11))),
                    Expr::Number(NumberLiteral::new(2.0, at(1, 7, 15))),
                ],
                position: at(1, 0, 8),
            }),
            Node::Call(Call {
                callee: Identifier::new("UwU", at(2, 0, 17)),
                arguments: vec![Expr::Identifier(Identifier::new("@_@", at(2, 4, 21)))],
            }),
        ]
    );
}

#[test]
fn test_empty_tree() {
    let ir = lower_str("\n\n").unwrap_or_else(|e| panic!("{e}"));
    assert!(ir.is_empty());
}

#[test]
fn test_leading_number_is_not_an_identifier() {
    let tree = TreeRoot::new(vec![TList::new(vec![
        Expr::Number(NumberLiteral::new(5.0, at(0, 0, 0))),
        Expr::Identifier(Identifier::new("UwU", at(0, 2, 2))),
    ])]);
    assert_eq!(
        lower(&tree),
        Err(LowerError::NotAnIdentifier {
            found: "number `5`".to_string(),
            position: at(0, 0, 0),
        })
    );
}

#[test]
fn test_unknown_keyword() {
    assert_eq!(
        lower_str("nya x\n"),
        Err(LowerError::UnknownKeyword {
            name: "nya".to_string(),
            position: at(0, 0, 0),
        })
    );
}

#[test]
fn test_declaration_arity() {
    assert!(matches!(
        lower_str("O.O\n"),
        Err(LowerError::DeclarationArity { found: 0, .. })
    ));
    assert!(matches!(
        lower_str("O.O a b\n"),
        Err(LowerError::DeclarationArity { found: 2, .. })
    ));
}

#[test]
fn test_declaration_target_must_be_a_name() {
    assert!(matches!(
        lower_str("O.O 3\n"),
        Err(LowerError::DeclarationTarget { .. })
    ));
}

#[test]
fn test_empty_list() {
    let tree = TreeRoot::new(vec![TList::default()]);
    assert_eq!(lower(&tree), Err(LowerError::EmptyList));
}

#[test]
fn test_parsed_trees_have_no_empty_lists() {
    let tree = parse_str("\n\n  \nUwU\n\t\n\nO.O x\n\n")
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(tree.len(), 2);
    assert!(tree.iter().all(|list| !list.children.is_empty()));
    assert!(lower(&tree).is_ok());
}

#[test]
fn test_extended_statement_arity_is_not_checked_here() {
    let ir = lower_str(":v a\n").unwrap_or_else(|e| panic!("{e}"));
    assert!(matches!(&ir.children[0], Node::Stx(stx) if stx.arguments.len() == 1));
}

#[test]
fn test_call_keeps_every_argument() {
    let ir = lower_str("UwU a 1 b\n").unwrap_or_else(|e| panic!("{e}"));
    let Node::Call(call) = &ir.children[0] else {
        panic!("expected a call");
    };
    assert_eq!(call.callee.name, "UwU");
    assert_eq!(call.arguments.len(), 3);
}

#[test]
fn test_lowering_twice_is_identical() {
    let tree = parse_str("O.O x\nUwU x\n").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(lower(&tree), lower(&tree));
}
