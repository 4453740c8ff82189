use super::*;
use pretty_assertions::assert_eq;
use uwu_ir::{Identifier, Node, NumberLiteral, SourcePosition, TreeRoot};

fn ir(source: &str) -> TreeRoot<Node> {
    let tree = uwu_parse::parse_str(source).unwrap_or_else(|e| panic!("parse: {e}"));
    uwu_lower::lower(&tree).unwrap_or_else(|e| panic!("lower: {e}"))
}

fn compile(source: &str) -> Result<String, CodegenError> {
    let mut out = String::new();
    CBackend::new().compile(&ir(source), &mut out)?;
    Ok(out)
}

#[test]
fn test_declare_accumulate_print() {
    assert_eq!(
        compile("O.O @_@\n:v @_@ 2\nUwU @_@\n"),
        Ok("#include <stdio.h>\n\
            \n\
            int main(int argc, char** argv) {\n\
            \x20   int _at___at_ = 0;\n\
            \x20   _at___at_ += 2;\n\
            \x20   printf(\"%d\\n\", _at___at_);\n\
            \x20   return 0;\n\
            }\n"
            .to_string())
    );
}

#[test]
fn test_printf_several_arguments() {
    let out = compile("O.O a\nO.O b\nUwU a b 7\n").unwrap_or_else(|e| panic!("{e}"));
    assert!(
        out.contains("    printf(\"%d %d %d\\n\", a, b, 7);\n"),
        "output: {out}"
    );
}

#[test]
fn test_printf_without_arguments() {
    let out = compile("UwU\n").unwrap_or_else(|e| panic!("{e}"));
    assert!(out.contains("    printf(\"\\n\");\n"), "output: {out}");
}

#[test]
fn test_fractional_literal_has_no_format_option() {
    assert_eq!(
        compile("UwU 1.5\n"),
        Err(CodegenError::FormatOption {
            type_name: "float",
            position: SourcePosition::new(0, 4, 4),
        })
    );
}

#[test]
fn test_undeclared_variable() {
    assert_eq!(
        compile("UwU x\n"),
        Err(CodegenError::UnknownVariableType {
            name: "x".to_string(),
            position: SourcePosition::new(0, 4, 4),
        })
    );
}

#[test]
fn test_variable_types_use_raw_names() {
    let out = compile("O.O a.b\nUwU a.b\n").unwrap_or_else(|e| panic!("{e}"));
    assert!(out.contains("int a_dot_b = 0;"), "output: {out}");
    assert!(out.contains("printf(\"%d\\n\", a_dot_b);"), "output: {out}");
}

#[test]
fn test_accumulate_fraction() {
    let out = compile("O.O x\n:v x 0.25\n").unwrap_or_else(|e| panic!("{e}"));
    assert!(out.contains("    x += 0.25;\n"), "output: {out}");
}

#[test]
fn test_accumulate_arity() {
    assert!(matches!(
        compile("O.O x\n:v x\n"),
        Err(CodegenError::StatementArity {
            expected: 2,
            found: 1,
            ..
        })
    ));
}

#[test]
fn test_accumulate_target_must_be_a_name() {
    assert!(matches!(
        compile(":v 1 2\n"),
        Err(CodegenError::StatementTarget { .. })
    ));
}

#[test]
fn test_unknown_call_name() {
    let root = TreeRoot::new(vec![Node::Call(Call {
        callee: Identifier::new("nya", SourcePosition::START),
        arguments: vec![Expr::Number(NumberLiteral::new(1.0, SourcePosition::START))],
    })]);
    let mut out = String::new();
    assert_eq!(
        CBackend::new().compile(&root, &mut out),
        Err(CodegenError::UnknownCall {
            name: "nya".to_string(),
            position: SourcePosition::START,
        })
    );
}

#[test]
fn test_backend_can_be_reused() {
    let root = ir("O.O x\nUwU x\n");
    let mut backend = CBackend::new();
    let mut first = String::new();
    let mut second = String::new();
    backend
        .compile(&root, &mut first)
        .unwrap_or_else(|e| panic!("{e}"));
    backend
        .compile(&root, &mut second)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(first, second);
}

#[test]
fn test_format_table() {
    assert_eq!(CType::Int.format_placeholder(), Some("%d"));
    assert_eq!(CType::Float.format_placeholder(), None);
}
