//! Trees handed between pipeline stages.

use std::fmt;

use crate::Expr;

/// One logical source line: the leaves collected between two newlines.
///
/// Built once by the parser and never mutated afterwards. The first leaf is
/// the line's leading keyword.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TList {
    pub children: Vec<Expr>,
}

impl TList {
    pub fn new(children: Vec<Expr>) -> Self {
        TList { children }
    }

    /// Split into the leading element and the remaining arguments.
    pub fn split_first(&self) -> Option<(&Expr, &[Expr])> {
        self.children.split_first()
    }
}

impl fmt::Display for TList {
    /// Leaves separated by single spaces, as they would be written.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

/// The top of a compiled unit.
///
/// `TreeRoot<TList>` before the semantic pass, `TreeRoot<Node>` after it.
#[derive(Clone, PartialEq, Debug)]
pub struct TreeRoot<T> {
    pub children: Vec<T>,
}

impl<T> TreeRoot<T> {
    pub fn new(children: Vec<T>) -> Self {
        TreeRoot { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.children.iter()
    }
}

impl<T> Default for TreeRoot<T> {
    fn default() -> Self {
        TreeRoot {
            children: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a TreeRoot<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identifier, NumberLiteral, SourcePosition};
    use pretty_assertions::assert_eq;

    #[test]
    fn list_display_joins_leaves() {
        let at = SourcePosition::START;
        let list = TList::new(vec![
            Expr::Identifier(Identifier::new(":v", at)),
            Expr::Identifier(Identifier::new("@_@", at)),
            Expr::Number(NumberLiteral::new(2.0, at)),
        ]);
        assert_eq!(list.to_string(), ":v @_@ 2");
        assert_eq!(TList::default().to_string(), "");
    }

    #[test]
    fn root_iterates_in_order() {
        let root = TreeRoot::new(vec![1, 2, 3]);
        assert_eq!(root.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        let mut seen = 0;
        for _ in &root {
            seen += 1;
        }
        assert_eq!(seen, root.len());
        assert!(TreeRoot::<u8>::default().is_empty());
    }
}
