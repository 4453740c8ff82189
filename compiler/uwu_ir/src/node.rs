//! Typed IR produced by the semantic pass.
//!
//! The node set is closed: backends match on [`Node`] exhaustively, so a node
//! kind without a code generation rule is a compile error rather than a
//! runtime failure.

use std::fmt;

use crate::{Expr, Identifier, SourcePosition};

/// Declared variable type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    Int,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Int => "INT",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extended statement form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StxTag {
    /// Accumulate: `target += value`.
    Sum,
}

impl StxTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StxTag::Sum => "SUM",
        }
    }

    /// Number of arguments the form requires.
    pub fn arity(self) -> usize {
        match self {
            StxTag::Sum => 2,
        }
    }
}

impl fmt::Display for StxTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in invocation.
#[derive(Clone, PartialEq, Debug)]
pub struct Call {
    pub callee: Identifier,
    pub arguments: Vec<Expr>,
}

/// Variable declaration. The initializer is fixed per type by each backend.
#[derive(Clone, PartialEq, Debug)]
pub struct Decl {
    pub declared_type: TypeTag,
    pub variable: Identifier,
}

/// Syntax extension point. Arity is checked per tag by the backends.
#[derive(Clone, PartialEq, Debug)]
pub struct ExtendedStatement {
    pub name: StxTag,
    pub arguments: Vec<Expr>,
    /// Position of the keyword that introduced the statement.
    pub position: SourcePosition,
}

/// A top-level IR statement.
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    Call(Call),
    Decl(Decl),
    Stx(ExtendedStatement),
}

impl Node {
    pub fn position(&self) -> SourcePosition {
        match self {
            Node::Call(call) => call.callee.position,
            Node::Decl(decl) => decl.variable.position,
            Node::Stx(stx) => stx.position,
        }
    }
}

impl fmt::Display for Node {
    /// One line, keyword first: `Decl INT @_@`, `Stx SUM @_@ 2`, `Call UwU @_@`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments = match self {
            Node::Call(call) => {
                write!(f, "Call {}", call.callee)?;
                &call.arguments
            }
            Node::Decl(decl) => return write!(f, "Decl {} {}", decl.declared_type, decl.variable),
            Node::Stx(stx) => {
                write!(f, "Stx {}", stx.name)?;
                &stx.arguments
            }
        };
        for argument in arguments {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}
