//! UwU Compiler CLI
//!
//! Compiles UwU source files to C or Python.

mod commands;
mod tracing_setup;

use std::path::Path;

use commands::{build_files, lex_file, parse_build_options, parse_color_flag, parse_file};
use uwu_diagnostic::emitter::ColorMode;

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "build" => build(&args[2..]),
        "lex" | "parse" => {
            let Some((path, color)) = debug_args(&args[2..], command) else {
                std::process::exit(1);
            };
            if command == "lex" {
                lex_file(Path::new(path), color)
            } else {
                parse_file(Path::new(path), color)
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("UwU Compiler {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // A source file (or a build flag) means an implicit `build`.
            let is_source = Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("uwu"));
            let is_build_flag = matches!(command.as_str(), "--c" | "--python" | "-o")
                || command.starts_with("--color=");
            if is_source || is_build_flag {
                build(&args[1..])
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                1
            }
        }
    };

    std::process::exit(code);
}

fn build(args: &[String]) -> i32 {
    match parse_build_options(args) {
        Ok(options) => build_files(&options),
        Err(message) => {
            eprintln!("uwuc build: {message}");
            eprintln!("Usage: uwuc build [--c | --python] [-o <out>] <file.uwu>...");
            1
        }
    }
}

/// Arguments of `lex` and `parse`: one path and an optional `--color`.
fn debug_args<'a>(args: &'a [String], command: &str) -> Option<(&'a str, ColorMode)> {
    let mut path = None;
    let mut color = ColorMode::Auto;
    for arg in args {
        match parse_color_flag(arg) {
            Some(Ok(mode)) => color = mode,
            Some(Err(message)) => {
                eprintln!("uwuc {command}: {message}");
                return None;
            }
            None if path.is_none() => path = Some(arg.as_str()),
            None => {
                eprintln!("uwuc {command}: unexpected argument '{arg}'");
                return None;
            }
        }
    }
    if path.is_none() {
        eprintln!("Usage: uwuc {command} <file.uwu>");
    }
    path.map(|path| (path, color))
}

fn print_usage() {
    println!("UwU Compiler");
    println!();
    println!("Usage: uwuc <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <file.uwu>...  Compile to C or Python (default: Python)");
    println!("  lex <file.uwu>       Tokenize and display tokens");
    println!("  parse <file.uwu>     Parse and display the line tree and IR");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Build options:");
    println!("  --c                 Emit C (<file>.c)");
    println!("  --python            Emit Python (<file>.py)");
    println!("  -o <path>           Output file (single input only)");
    println!();
    println!("Common options:");
    println!("  --color=<mode>      Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable logging, e.g. RUST_LOG=uwu_parse=debug");
    println!("  UWU_LOG_TREE        Show logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  uwuc hello.uwu                  # Same as `uwuc build hello.uwu`");
    println!("  uwuc build --c hello.uwu        # Writes hello.c");
    println!("  uwuc build -o out.py hello.uwu");
    println!("  uwuc build --c a.uwu b.uwu      # Files are compiled in parallel");
    println!("  uwuc lex hello.uwu");
}
