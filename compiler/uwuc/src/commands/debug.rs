//! Debug commands: `lex` and `parse` for inspecting compiler internals.

use std::path::Path;

use uwu_compiler::{lex_source, lower_tree, parse_source, BackendKind, CompileConfig, CompileError};
use uwu_diagnostic::emitter::ColorMode;

use super::{read_source, render_error};

/// Read `path`, run `stage` on it and report any failure. Returns the exit code.
fn run_stage(
    path: &Path,
    color: ColorMode,
    stage: impl FnOnce(&str, &CompileConfig) -> Result<(), CompileError>,
) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{message}");
            return 1;
        }
    };
    let config = CompileConfig::for_path(path, BackendKind::default());
    match stage(&source, &config) {
        Ok(()) => 0,
        Err(err) => {
            eprint!("{}", render_error(&err, &source, &config, color));
            1
        }
    }
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &Path, color: ColorMode) -> i32 {
    run_stage(path, color, |source, config| {
        let tokens = lex_source(source, config)?;
        println!("Tokens for '{}' ({} tokens):", path.display(), tokens.len());
        for token in &tokens {
            println!("  {token}");
        }
        Ok(())
    })
}

/// Parse and lower a file, displaying both trees.
pub fn parse_file(path: &Path, color: ColorMode) -> i32 {
    run_stage(path, color, |source, config| {
        let tree = parse_source(source, config)?;
        println!("Parse result for '{}':", path.display());
        println!("  Lines: {}", tree.len());
        for (i, list) in tree.iter().enumerate() {
            println!("  [{i}] {list}");
        }

        let ir = lower_tree(&tree)?;
        println!();
        println!("IR ({} nodes):", ir.len());
        for node in &ir {
            println!("  {node} @ {}", node.position());
        }
        Ok(())
    })
}
