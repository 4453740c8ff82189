//! Diagnostic Emitters
//!
//! Renders diagnostics for humans. The terminal emitter is the only output
//! format; the [`DiagnosticEmitter`] trait is the seam for adding others.

mod terminal;

pub use terminal::{stderr_emitter, ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing line of a run that reported `error_count` errors.
    fn emit_summary(&mut self, error_count: usize);
}
