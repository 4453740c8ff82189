//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E0001]: unrecognized character `$`
//!   --> hello.uwu:2:5
//!    |
//!  2 | O.O $
//!    |     ^ unexpected character
//!    = note: ...
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Source snippets are only drawn when the source text has been supplied
/// with [`with_source`](Self::with_source).
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<&'src str>,
    file_path: Option<&'src str>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text used to draw snippets.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach the file label shown in `-->` locators.
    #[must_use]
    pub fn with_file_path(mut self, file_path: &'src str) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_gutter(&mut self, gutter: &str, text: &str) {
        let _ = write!(self.writer, "{gutter}");
        self.write_colored(text, colors::SECONDARY);
    }

    /// Text of a zero-based source line, if the source is known.
    fn source_line(&self, line: u32) -> Option<&'src str> {
        self.source?.lines().nth(line as usize)
    }

    fn emit_label(&mut self, label: &Label, gutter: &str) {
        let _ = write!(self.writer, "{gutter}");
        self.write_colored("-->", colors::SECONDARY);
        match self.file_path {
            Some(path) => {
                let _ = write!(self.writer, " {path}:{}", label.position);
            }
            None => {
                let _ = write!(self.writer, " {}", label.position);
            }
        }

        let Some(text) = self.source_line(label.position.line) else {
            let _ = writeln!(self.writer, ": {}", label.message);
            return;
        };
        let _ = writeln!(self.writer);

        let line_number = (label.position.line + 1).to_string();
        let number_pad = " ".repeat(gutter.len().saturating_sub(line_number.len()));

        self.write_gutter(gutter, " |");
        let _ = writeln!(self.writer);

        self.write_gutter(&format!("{number_pad}{line_number}"), " |");
        let _ = writeln!(self.writer, " {text}");

        // Reproduce tabs so the underline lines up with the source text.
        let indent: String = text
            .chars()
            .take(label.position.column as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let underline = "^".repeat(label.len.max(1) as usize);

        self.write_gutter(gutter, " |");
        let _ = write!(self.writer, " {indent}");
        self.write_colored(&format!("{underline} {}", label.message), colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let widest = diagnostic
            .labels
            .iter()
            .map(|l| (l.position.line + 1).to_string().len())
            .max()
            .unwrap_or(1);
        let gutter = " ".repeat(widest + 1);

        for label in &diagnostic.labels {
            self.emit_label(label, &gutter);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{gutter} = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "{gutter} = ");
            if self.colors {
                let _ = write!(self.writer, "{}help{}", colors::HELP, colors::RESET);
            } else {
                let _ = write!(self.writer, "help");
            }
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}

/// Standard error stream, for the CLI.
pub fn stderr_emitter<'src>(mode: ColorMode, is_tty: bool) -> TerminalEmitter<'src, io::Stderr> {
    TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
}
