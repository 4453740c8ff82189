//! `uwuc build`: compile source files to C or Python.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use uwu_compiler::{compile, BackendKind, CompileConfig};
use uwu_diagnostic::emitter::{stderr_emitter, ColorMode, DiagnosticEmitter};

use super::{parse_color_flag, read_source, render_error};

/// Options for `uwuc build`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub backend: BackendKind,
    /// Explicit output path. Only valid with a single input.
    pub output: Option<PathBuf>,
    pub inputs: Vec<PathBuf>,
    pub color: ColorMode,
}

impl BuildOptions {
    /// Where the output for `input` goes.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => default_output_path(input, self.backend),
        }
    }
}

/// The input path with its extension replaced by the backend's.
pub fn default_output_path(input: &Path, backend: BackendKind) -> PathBuf {
    input.with_extension(backend.extension().trim_start_matches('.'))
}

/// Parse the arguments that follow `build`.
pub fn parse_build_options(args: &[String]) -> Result<BuildOptions, String> {
    let mut options = BuildOptions::default();
    let mut chosen: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--c" | "--python" => {
                if let Some(previous) = chosen.filter(|&previous| previous != arg) {
                    return Err(format!("argument {arg}: not allowed with argument {previous}"));
                }
                chosen = Some(arg);
                options.backend = if arg == "--c" {
                    BackendKind::C
                } else {
                    BackendKind::Python
                };
            }
            "-o" => {
                let Some(output) = args.get(i + 1) else {
                    return Err("argument -o: expected an output path".to_string());
                };
                options.output = Some(PathBuf::from(output));
                i += 1;
            }
            _ => {
                if let Some(color) = parse_color_flag(arg) {
                    options.color = color?;
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unrecognized argument '{arg}'"));
                } else {
                    options.inputs.push(PathBuf::from(arg));
                }
            }
        }
        i += 1;
    }

    if options.inputs.is_empty() {
        return Err("missing input file".to_string());
    }
    if options.output.is_some() && options.inputs.len() > 1 {
        return Err("argument -o: only allowed with a single input file".to_string());
    }
    Ok(options)
}

/// Compile one file and write its output. Errors come back rendered.
fn build_one(input: &Path, options: &BuildOptions) -> Result<PathBuf, String> {
    let source = read_source(input)?;
    let config = CompileConfig::for_path(input, options.backend);

    let code = compile(&source, &config)
        .map_err(|err| render_error(&err, &source, &config, options.color))?;

    let output = options.output_path(input);
    std::fs::write(&output, code)
        .map_err(|e| format!("uwuc: cannot write '{}': {e}", output.display()))?;
    debug!(input = %input.display(), output = %output.display(), "built");
    Ok(output)
}

/// Compile every input, in parallel. Returns the process exit code.
///
/// Diagnostics are printed in input order once all files are done.
pub fn build_files(options: &BuildOptions) -> i32 {
    let outcomes: Vec<Result<PathBuf, String>> = options
        .inputs
        .par_iter()
        .map(|input| build_one(input, options))
        .collect();

    let mut failed = 0;
    for message in outcomes.into_iter().filter_map(Result::err) {
        eprintln!("{}", message.trim_end());
        failed += 1;
    }

    if failed == 0 {
        return 0;
    }
    if options.inputs.len() > 1 {
        let mut emitter = stderr_emitter(options.color, std::io::stderr().is_terminal());
        emitter.emit_summary(failed);
        emitter.flush();
    }
    1
}

#[cfg(test)]
mod tests;
