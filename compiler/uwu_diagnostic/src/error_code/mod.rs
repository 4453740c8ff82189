//! Error codes for all compiler diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the compiler phase.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Semantic pass errors
/// - E5xxx: Codegen errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character in source
    E0001,
    /// Decimal point not followed by a digit or separator
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Missing newline after a sequence of expressions
    E1002,
    /// Token kind that cannot be evaluated as an expression
    E1003,

    // Semantic Errors (E2xxx)
    /// Line does not start with an identifier
    E2001,
    /// Leading keyword is not a call, declaration or extended statement
    E2002,
    /// Declaration does not have exactly one argument
    E2003,
    /// Declaration target is not an identifier
    E2004,
    /// Empty line reached the semantic pass
    E2005,

    // Codegen Errors (E5xxx)
    /// Unknown built-in call name
    E5001,
    /// No format placeholder registered for an argument type
    E5002,
    /// Type of a variable or literal is unknown
    E5003,
    /// Extended statement has the wrong number of arguments
    E5004,
    /// Accumulate target is not an identifier
    E5005,
    /// Writing to the output sink failed
    E5006,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        // Lexer
        ErrorCode::E0001,
        ErrorCode::E0002,
        // Parser
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        // Semantic
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        // Codegen
        ErrorCode::E5001,
        ErrorCode::E5002,
        ErrorCode::E5003,
        ErrorCode::E5004,
        ErrorCode::E5005,
        ErrorCode::E5006,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            // Semantic
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            // Codegen
            ErrorCode::E5001 => "E5001",
            ErrorCode::E5002 => "E5002",
            ErrorCode::E5003 => "E5003",
            ErrorCode::E5004 => "E5004",
            ErrorCode::E5005 => "E5005",
            ErrorCode::E5006 => "E5006",
        }
    }

    /// One-line summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unrecognized character",
            ErrorCode::E0002 => "expected digit after decimal point",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected newline after sequence of expressions",
            ErrorCode::E1003 => "token cannot be evaluated as an expression",
            ErrorCode::E2001 => "start of expression is not an identifier",
            ErrorCode::E2002 => "line cannot become a recognized construct",
            ErrorCode::E2003 => "declaration expects exactly one identifier",
            ErrorCode::E2004 => "declaration target is not an identifier",
            ErrorCode::E2005 => "empty expression list",
            ErrorCode::E5001 => "callable name not found",
            ErrorCode::E5002 => "format option not found",
            ErrorCode::E5003 => "unknown type",
            ErrorCode::E5004 => "wrong number of arguments for extended statement",
            ErrorCode::E5005 => "extended statement target is not an identifier",
            ErrorCode::E5006 => "failed to write output",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    /// Check if this is a semantic pass error (E2xxx range).
    pub fn is_semantic_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001
                | ErrorCode::E2002
                | ErrorCode::E2003
                | ErrorCode::E2004
                | ErrorCode::E2005
        )
    }

    /// Check if this is a codegen error (E5xxx range).
    pub fn is_codegen_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E5001
                | ErrorCode::E5002
                | ErrorCode::E5003
                | ErrorCode::E5004
                | ErrorCode::E5005
                | ErrorCode::E5006
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
