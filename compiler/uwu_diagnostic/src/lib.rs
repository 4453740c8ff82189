//! Diagnostic system for error reporting.
//!
//! Every pipeline stage reports failures as a typed error that converts to a
//! [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary location (where it went wrong)
//! - Notes and help lines (why, and how to fix)
//!
//! Diagnostics are rendered by [`emitter::TerminalEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
