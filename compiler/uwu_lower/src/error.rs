//! Semantic pass errors.

use thiserror::Error;
use uwu_diagnostic::{Diagnostic, ErrorCode};
use uwu_ir::SourcePosition;

use crate::keywords;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LowerError {
    /// A flat list with no elements.
    ///
    /// The parser never builds an empty list, so this is only reachable from
    /// trees constructed by hand.
    #[error("empty expression list")]
    EmptyList,

    /// The first element of a line is a number.
    ///
    /// The parser already rejects such lines (E1001); this catches trees
    /// constructed by hand.
    #[error("at {position}: start of expression is not an identifier: {found}")]
    NotAnIdentifier {
        found: String,
        position: SourcePosition,
    },

    /// The leading name is in none of the keyword tables.
    #[error("at {position}: `{name}` cannot become a recognized construct")]
    UnknownKeyword {
        name: String,
        position: SourcePosition,
    },

    /// A declaration with zero or several arguments.
    #[error("at {position}: declaration expects exactly one identifier, found {found} arguments")]
    DeclarationArity {
        found: usize,
        position: SourcePosition,
    },

    /// A declaration whose single argument is not a name.
    #[error("at {position}: declaration target must be an identifier, found {found}")]
    DeclarationTarget {
        found: String,
        position: SourcePosition,
    },
}

impl LowerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LowerError::EmptyList => ErrorCode::E2005,
            LowerError::NotAnIdentifier { .. } => ErrorCode::E2001,
            LowerError::UnknownKeyword { .. } => ErrorCode::E2002,
            LowerError::DeclarationArity { .. } => ErrorCode::E2003,
            LowerError::DeclarationTarget { .. } => ErrorCode::E2004,
        }
    }

    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            LowerError::EmptyList => None,
            LowerError::NotAnIdentifier { position, .. }
            | LowerError::UnknownKeyword { position, .. }
            | LowerError::DeclarationArity { position, .. }
            | LowerError::DeclarationTarget { position, .. } => Some(*position),
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            LowerError::EmptyList => diag.with_message("empty expression list"),
            LowerError::NotAnIdentifier { found, position } => diag
                .with_message(format!("start of expression is not an identifier: {found}"))
                .with_label(*position, 1, "expected a keyword")
                .with_note("each line must start with a keyword"),
            LowerError::UnknownKeyword { name, position } => {
                let expected = keywords::all()
                    .map(|k| format!("`{k}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                diag.with_message(format!("unknown keyword `{name}`"))
                    .with_label(
                        *position,
                        u32::try_from(name.chars().count()).unwrap_or(u32::MAX),
                        "not a call, declaration or extended statement",
                    )
                    .with_note(format!("expected one of {expected}"))
            }
            LowerError::DeclarationArity { found, position } => diag
                .with_message(format!(
                    "declaration expects exactly one identifier, found {found} arguments"
                ))
                .with_label(*position, 1, "declared here"),
            LowerError::DeclarationTarget { found, position } => diag
                .with_message(format!(
                    "declaration target must be an identifier, found {found}"
                ))
                .with_label(*position, 1, "not a name"),
        }
    }
}

#[cfg(test)]
mod tests;
