//! Command handlers for the `uwuc` CLI.
//!
//! Each submodule implements one command. Shared utilities like `read_source`
//! and the `--color` flag live here in the module root.

use std::io::IsTerminal;
use std::path::Path;

use uwu_diagnostic::emitter::ColorMode;
use uwu_compiler::{render_diagnostic, CompileConfig, CompileError};

mod build;
mod debug;

pub use build::{build_files, parse_build_options};
pub use debug::{lex_file, parse_file};

/// Read a source file, describing any failure the way the CLI prints it.
pub(crate) fn read_source(path: &Path) -> Result<String, String> {
    if !path.is_file() {
        return Err(format!("uwuc: '{}' does not exist.", path.display()));
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => {
            format!("uwuc: permission denied reading '{}'", path.display())
        }
        std::io::ErrorKind::InvalidData => {
            format!("uwuc: '{}' contains invalid UTF-8 data", path.display())
        }
        _ => format!("uwuc: error reading '{}': {e}", path.display()),
    })
}

/// Parse a `--color=<mode>` flag. Returns `None` for other arguments.
pub(crate) fn parse_color_flag(arg: &str) -> Option<Result<ColorMode, String>> {
    arg.strip_prefix("--color=").map(str::parse)
}

/// Render a pipeline error for stderr.
pub(crate) fn render_error(
    error: &CompileError,
    source: &str,
    config: &CompileConfig,
    color: ColorMode,
) -> String {
    render_diagnostic(error, source, config, color, std::io::stderr().is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn color_flag() {
        assert_eq!(parse_color_flag("--color=never"), Some(Ok(ColorMode::Never)));
        assert!(matches!(parse_color_flag("--color=loud"), Some(Err(_))));
        assert_eq!(parse_color_flag("--c"), None);
    }

    #[test]
    fn missing_file_message() {
        let err = read_source(Path::new("definitely/not/here.uwu")).err();
        assert_eq!(
            err,
            Some(format!(
                "uwuc: '{}' does not exist.",
                Path::new("definitely/not/here.uwu").display()
            ))
        );
    }
}
