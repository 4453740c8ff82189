//! Pipeline errors.

use std::fmt;

use thiserror::Error;
use uwu_codegen::CodegenError;
use uwu_diagnostic::{Diagnostic, ErrorCode};
use uwu_ir::SourcePosition;
use uwu_lexer::LexError;
use uwu_lower::LowerError;
use uwu_parse::ParseError;

/// The pipeline stage an error came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorPhase {
    Lex,
    Parse,
    Lower,
    Codegen,
}

impl fmt::Display for ErrorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorPhase::Lex => "lexing",
            ErrorPhase::Parse => "parsing",
            ErrorPhase::Lower => "semantic analysis",
            ErrorPhase::Codegen => "code generation",
        })
    }
}

/// The first error of a pipeline run.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(ParseError),
    #[error(transparent)]
    Lower(#[from] LowerError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Lexical errors surfacing through the parser are reported as such.
impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(err) => CompileError::Lex(err),
            other => CompileError::Parse(other),
        }
    }
}

impl CompileError {
    pub fn phase(&self) -> ErrorPhase {
        match self {
            CompileError::Lex(_) => ErrorPhase::Lex,
            CompileError::Parse(_) => ErrorPhase::Parse,
            CompileError::Lower(_) => ErrorPhase::Lower,
            CompileError::Codegen(_) => ErrorPhase::Codegen,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Lex(err) => err.code(),
            CompileError::Parse(err) => err.code(),
            CompileError::Lower(err) => err.code(),
            CompileError::Codegen(err) => err.code(),
        }
    }

    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            CompileError::Lex(err) => Some(err.position),
            CompileError::Parse(err) => Some(err.position()),
            CompileError::Lower(err) => err.position(),
            CompileError::Codegen(err) => err.position(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Lex(err) => err.to_diagnostic(),
            CompileError::Parse(err) => err.to_diagnostic(),
            CompileError::Lower(err) => err.to_diagnostic(),
            CompileError::Codegen(err) => err.to_diagnostic(),
        }
    }
}
