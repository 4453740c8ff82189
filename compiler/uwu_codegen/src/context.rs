//! Code generation context and output state.
//!
//! The `CodegenContext` owns the indentation level and writes finished lines
//! straight to the caller's sink, in traversal order.

use std::fmt;

use tracing::trace;

use crate::CodegenError;

/// Output state for one compilation.
pub struct CodegenContext<'out> {
    out: &'out mut dyn fmt::Write,
    /// Current indentation level.
    indent: usize,
    /// Lines written so far.
    lines: usize,
}

impl<'out> CodegenContext<'out> {
    pub fn new(out: &'out mut dyn fmt::Write) -> Self {
        CodegenContext {
            out,
            indent: 0,
            lines: 0,
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line (with indentation and newline).
    ///
    /// An empty line is written without indentation.
    pub fn writeln(&mut self, s: &str) -> Result<(), CodegenError> {
        if !s.is_empty() {
            for _ in 0..self.indent {
                self.out.write_str("    ")?;
            }
        }
        self.out.write_str(s)?;
        self.out.write_char('\n')?;
        self.lines += 1;
        trace!(line = s, "emit");
        Ok(())
    }

    /// Number of lines written.
    pub fn lines(&self) -> usize {
        self.lines
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indentation_applies_to_nonempty_lines() {
        let mut out = String::new();
        {
            let mut ctx = CodegenContext::new(&mut out);
            ctx.writeln("a").unwrap();
            ctx.indent();
            ctx.writeln("b").unwrap();
            ctx.writeln("").unwrap();
            ctx.dedent();
            ctx.writeln("c").unwrap();
            assert_eq!(ctx.lines(), 4);
        }
        assert_eq!(out, "a\n    b\n\nc\n");
    }
}
