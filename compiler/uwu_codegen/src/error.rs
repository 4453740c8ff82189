//! Code generation errors.

use std::fmt;

use thiserror::Error;
use uwu_diagnostic::{Diagnostic, ErrorCode};
use uwu_ir::{SourcePosition, StxTag};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CodegenError {
    /// The callee is not in the backend's call table.
    #[error("at {position}: callable name not found: `{name}`")]
    UnknownCall {
        name: String,
        position: SourcePosition,
    },

    /// A print argument whose type has no format placeholder.
    #[error("at {position}: format option for type `{type_name}` not found")]
    FormatOption {
        type_name: &'static str,
        position: SourcePosition,
    },

    /// An identifier argument that was never declared.
    #[error("at {position}: unknown variable type for `{name}`")]
    UnknownVariableType {
        name: String,
        position: SourcePosition,
    },

    /// An extended statement with the wrong number of arguments.
    #[error("at {position}: expected {expected} arguments in {name} statement, found {found}")]
    StatementArity {
        name: StxTag,
        expected: usize,
        found: usize,
        position: SourcePosition,
    },

    /// An extended statement whose target is not a name.
    #[error("at {position}: expected identifier as first argument of {name} statement, found {found}")]
    StatementTarget {
        name: StxTag,
        found: String,
        position: SourcePosition,
    },

    /// The output sink refused a write.
    #[error("failed to write output")]
    Write(#[from] fmt::Error),
}

impl CodegenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CodegenError::UnknownCall { .. } => ErrorCode::E5001,
            CodegenError::FormatOption { .. } => ErrorCode::E5002,
            CodegenError::UnknownVariableType { .. } => ErrorCode::E5003,
            CodegenError::StatementArity { .. } => ErrorCode::E5004,
            CodegenError::StatementTarget { .. } => ErrorCode::E5005,
            CodegenError::Write(_) => ErrorCode::E5006,
        }
    }

    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            CodegenError::UnknownCall { position, .. }
            | CodegenError::FormatOption { position, .. }
            | CodegenError::UnknownVariableType { position, .. }
            | CodegenError::StatementArity { position, .. }
            | CodegenError::StatementTarget { position, .. } => Some(*position),
            CodegenError::Write(_) => None,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            CodegenError::UnknownCall { name, position } => diag
                .with_message(format!("callable name not found: `{name}`"))
                .with_label(*position, char_len(name), "not a built-in of this backend"),
            CodegenError::FormatOption {
                type_name,
                position,
            } => diag
                .with_message(format!("format option for type `{type_name}` not found"))
                .with_label(*position, 1, "cannot be printed")
                .with_note("only `int` values can be printed by the C backend"),
            CodegenError::UnknownVariableType { name, position } => diag
                .with_message(format!("unknown variable type for `{name}`"))
                .with_label(*position, char_len(name), "used before its declaration")
                .with_suggestion(format!("declare it first: `O.O {name}`")),
            CodegenError::StatementArity {
                name,
                expected,
                found,
                position,
            } => diag
                .with_message(format!(
                    "expected {expected} arguments in {name} statement, found {found}"
                ))
                .with_label(*position, 1, "in this statement")
                .with_note("an accumulate statement takes a target identifier and a value"),
            CodegenError::StatementTarget {
                name,
                found,
                position,
            } => diag
                .with_message(format!(
                    "expected identifier as first argument of {name} statement, found {found}"
                ))
                .with_label(*position, 1, "not a name"),
            CodegenError::Write(_) => diag.with_message("failed to write output"),
        }
    }
}

fn char_len(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}
