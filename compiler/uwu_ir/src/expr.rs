//! Leaf expressions.
//!
//! Leaves appear both in the flat-list tree and in the lowered IR. The
//! semantic pass clones them across that boundary; the two trees never share
//! a leaf.

use std::fmt;

use crate::SourcePosition;

/// A name used as a value, a keyword or a callee.
#[derive(Clone, PartialEq, Debug)]
pub struct Identifier {
    pub name: String,
    pub position: SourcePosition,
}

impl Identifier {
    pub fn new(name: impl Into<String>, position: SourcePosition) -> Self {
        Identifier {
            name: name.into(),
            position,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A decimal literal.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct NumberLiteral {
    pub value: f64,
    pub position: SourcePosition,
}

impl NumberLiteral {
    pub fn new(value: f64, position: SourcePosition) -> Self {
        NumberLiteral { value, position }
    }

    /// Whether the value has no fractional part.
    #[expect(
        clippy::float_cmp,
        reason = "exact comparison against the truncated value is the intent"
    )]
    pub fn is_integral(&self) -> bool {
        self.value.is_finite() && self.value.trunc() == self.value
    }
}

impl fmt::Display for NumberLiteral {
    /// Shortest form: `2` for integral values, `1.5` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Any leaf expression.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Identifier(Identifier),
    Number(NumberLiteral),
}

impl Expr {
    pub fn position(&self) -> SourcePosition {
        match self {
            Expr::Identifier(id) => id.position,
            Expr::Number(n) => n.position,
        }
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Expr::Identifier(id) => Some(id),
            Expr::Number(_) => None,
        }
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Expr::Identifier(id) => format!("identifier `{id}`"),
            Expr::Number(n) => format!("number `{n}`"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(id) => id.fmt(f),
            Expr::Number(n) => n.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn number_display_is_shortest() {
        let at = SourcePosition::START;
        assert_eq!(NumberLiteral::new(2.0, at).to_string(), "2");
        assert_eq!(NumberLiteral::new(1.5, at).to_string(), "1.5");
        assert_eq!(NumberLiteral::new(123_456.0, at).to_string(), "123456");
    }

    #[test]
    fn integral_detection() {
        let at = SourcePosition::START;
        assert!(NumberLiteral::new(0.0, at).is_integral());
        assert!(NumberLiteral::new(42.0, at).is_integral());
        assert!(!NumberLiteral::new(0.25, at).is_integral());
    }

    #[test]
    fn describe_names_the_leaf() {
        let at = SourcePosition::START;
        assert_eq!(
            Expr::Identifier(Identifier::new("@_@", at)).describe(),
            "identifier `@_@`"
        );
        assert_eq!(Expr::Number(NumberLiteral::new(5.0, at)).describe(), "number `5`");
    }
}
