use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_defaults_to_python() {
    let options = parse_build_options(&args(&["hello.uwu"])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(options.backend, BackendKind::Python);
    assert_eq!(options.inputs, vec![PathBuf::from("hello.uwu")]);
    assert_eq!(options.output, None);
    assert_eq!(options.color, ColorMode::Auto);
}

#[test]
fn test_backend_flags() {
    let options = parse_build_options(&args(&["--c", "a.uwu", "b.uwu"]))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(options.backend, BackendKind::C);
    assert_eq!(options.inputs.len(), 2);

    let options = parse_build_options(&args(&["a.uwu", "--python"]))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(options.backend, BackendKind::Python);
}

#[test]
fn test_backend_flags_are_exclusive() {
    assert_eq!(
        parse_build_options(&args(&["--c", "--python", "a.uwu"])),
        Err("argument --python: not allowed with argument --c".to_string())
    );
}

#[test]
fn test_output_flag() {
    let options = parse_build_options(&args(&["-o", "out.c", "--c", "a.uwu"]))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(options.output_path(Path::new("a.uwu")), PathBuf::from("out.c"));

    assert!(parse_build_options(&args(&["a.uwu", "-o"])).is_err());
    assert!(parse_build_options(&args(&["-o", "x", "a.uwu", "b.uwu"])).is_err());
}

#[test]
fn test_color_and_unknown_flags() {
    let options = parse_build_options(&args(&["--color=always", "a.uwu"]))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(options.color, ColorMode::Always);

    assert!(parse_build_options(&args(&["--color=rainbow", "a.uwu"])).is_err());
    assert_eq!(
        parse_build_options(&args(&["--rust", "a.uwu"])),
        Err("unrecognized argument '--rust'".to_string())
    );
    assert_eq!(
        parse_build_options(&args(&["--c"])),
        Err("missing input file".to_string())
    );
}

#[test]
fn test_default_output_path_replaces_extension() {
    assert_eq!(
        default_output_path(Path::new("dir/hello.uwu"), BackendKind::C),
        PathBuf::from("dir/hello.c")
    );
    assert_eq!(
        default_output_path(Path::new("hello"), BackendKind::Python),
        PathBuf::from("hello.py")
    );
}

#[test]
fn test_missing_input_fails_build() {
    let options = BuildOptions {
        inputs: vec![PathBuf::from("no/such/file.uwu")],
        color: ColorMode::Never,
        ..BuildOptions::default()
    };
    assert_eq!(
        build_one(Path::new("no/such/file.uwu"), &options),
        Err(format!(
            "uwuc: '{}' does not exist.",
            Path::new("no/such/file.uwu").display()
        ))
    );
    assert_eq!(build_files(&options), 1);
}
