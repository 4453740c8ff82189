//! UwU compiler pipeline.
//!
//! Runs one unit through every stage:
//!
//! ```text
//! source text
//!     ↓  uwu_lexer::Tokenizer
//! tokens
//!     ↓  uwu_parse::Parser
//! TreeRoot<TList>
//!     ↓  uwu_lower::lower
//! TreeRoot<Node>
//!     ↓  uwu_codegen::BackendKind::compile
//! C or Python source
//! ```
//!
//! Each call owns all of its pipeline state, so independent units can be
//! compiled concurrently without locking. The first error aborts the run.

mod config;
mod error;

use std::fmt;

use tracing::{debug, info_span};
use uwu_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use uwu_ir::{Node, TList, Token, TreeRoot};
use uwu_lexer::Tokenizer;
use uwu_parse::Parser;

pub use config::CompileConfig;
pub use error::{CompileError, ErrorPhase};
pub use uwu_codegen::BackendKind;

/// Tokenize `source` through the first `EndOfFile`.
pub fn lex_source(source: &str, config: &CompileConfig) -> Result<Vec<Token>, CompileError> {
    let tokens = Tokenizer::new(source.chars(), config.label()).collect::<Result<Vec<_>, _>>()?;
    debug!(tokens = tokens.len(), "lexed unit");
    Ok(tokens)
}

/// Parse `source` into one flat list per non-blank line.
pub fn parse_source(source: &str, config: &CompileConfig) -> Result<TreeRoot<TList>, CompileError> {
    let tokenizer = Tokenizer::new(source.chars(), config.label());
    let tree = Parser::new(tokenizer)?.parse()?;
    Ok(tree)
}

/// Lower an already parsed tree into IR.
pub fn lower_tree(tree: &TreeRoot<TList>) -> Result<TreeRoot<Node>, CompileError> {
    Ok(uwu_lower::lower(tree)?)
}

/// Parse and lower `source` into IR.
pub fn lower_source(source: &str, config: &CompileConfig) -> Result<TreeRoot<Node>, CompileError> {
    lower_tree(&parse_source(source, config)?)
}

/// Compile `source` with the configured backend, writing into `out`.
///
/// Output already written when a code generation error occurs stays in
/// `out`.
pub fn compile_to(
    source: &str,
    config: &CompileConfig,
    out: &mut dyn fmt::Write,
) -> Result<(), CompileError> {
    let span = info_span!(
        "compile",
        unit = %config.display_path(),
        backend = %config.backend
    );
    let _guard = span.enter();

    let ir = lower_source(source, config)?;
    config.backend.compile(&ir, out)?;
    Ok(())
}

/// Compile `source` with the configured backend into a new string.
pub fn compile(source: &str, config: &CompileConfig) -> Result<String, CompileError> {
    let mut out = String::new();
    compile_to(source, config, &mut out)?;
    Ok(out)
}

/// Render `error` the way the command line shows it, with a source snippet.
pub fn render_diagnostic(
    error: &CompileError,
    source: &str,
    config: &CompileConfig,
    color: ColorMode,
    is_tty: bool,
) -> String {
    let path = config.display_path();
    let mut buf = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut buf, color, is_tty)
            .with_source(source)
            .with_file_path(&path);
        emitter.emit(&error.to_diagnostic());
        emitter.flush();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
