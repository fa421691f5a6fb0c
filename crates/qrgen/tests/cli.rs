use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn qrgen_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_qrgen"))
}

fn run_cli(args: &[&str], home: &TempDir) -> Output {
    let mut cmd = Command::new(qrgen_bin());
    cmd.args(args);
    cmd.env("QRGEN_HOME", home.path());
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("QRGEN_CONFIG");
    cmd.output().expect("failed to execute qrgen CLI")
}

fn run_ok(args: &[&str], home: &TempDir) -> String {
    let output = run_cli(args, home);
    assert!(
        output.status.success(),
        "command failed: {}\nstdout:\n{}\nstderr:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

fn run_err(args: &[&str], home: &TempDir) -> String {
    let output = run_cli(args, home);
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded: {}\nstdout:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout)
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stdout.is_empty(),
        "no partial output expected, got:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn glyph_lines(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}

#[test]
fn test_no_flags_prints_svg_for_hello_world() {
    let home = TempDir::new().expect("create temp home");
    let stdout = run_ok(&[], &home);

    assert!(stdout.contains("<svg"), "expected SVG output:\n{}", stdout);
    assert!(stdout.trim_end().ends_with("</svg>"));
    // Version 1 symbol: (21 + 8) modules * 4 units.
    assert!(stdout.contains("116"));
}

#[test]
fn test_console_output_is_29_by_58() {
    let home = TempDir::new().expect("create temp home");
    let stdout = run_ok(&["--print", "console", "-i", "Hello World"], &home);

    let lines = glyph_lines(&stdout);
    assert_eq!(lines.len(), 29);
    for line in lines {
        assert_eq!(line.chars().count(), 58);
    }
}

#[test]
fn test_console_output_is_repeatable() {
    let home = TempDir::new().expect("create temp home");
    let first = run_ok(&["-p", "console", "-e", "QUARTILE"], &home);
    let second = run_ok(&["-p", "console", "-e", "QUARTILE"], &home);
    assert_eq!(first, second);
}

#[test]
fn test_legacy_long_names_are_accepted() {
    let home = TempDir::new().expect("create temp home");
    let stdout = run_ok(
        &["--inputText", "abc", "--eccLvl", "MEDIUM", "--print", "console"],
        &home,
    );
    assert_eq!(glyph_lines(&stdout).len(), 29);
}

#[test]
fn test_tokenized_symbol_is_larger_than_plain() {
    let home = TempDir::new().expect("create temp home");
    let stdout = run_ok(&["--tokenize", "-G", "fixed-sig", "-p", "console"], &home);

    let lines = glyph_lines(&stdout);
    assert!(lines.len() > 29, "token should need a bigger symbol");
    let width = lines[0].chars().count();
    assert!(lines.iter().all(|l| l.chars().count() == width));
    assert_eq!(width, lines.len() * 2);
}

#[test]
fn test_unknown_level_fails_with_invalid_configuration() {
    let home = TempDir::new().expect("create temp home");
    let stderr = run_err(&["-e", "EXTREME"], &home);
    assert!(stderr.contains("InvalidConfiguration"), "stderr:\n{}", stderr);
    assert!(stderr.contains("EXTREME"));
}

#[test]
fn test_malformed_minutes_fail() {
    let home = TempDir::new().expect("create temp home");
    let stderr = run_err(&["--tokenize", "-E", "soon"], &home);
    assert!(stderr.contains("InvalidConfiguration"), "stderr:\n{}", stderr);
}

#[test]
fn test_not_before_after_expiry_fails() {
    let home = TempDir::new().expect("create temp home");
    let stderr = run_err(&["--tokenize", "-E", "5", "-B", "10"], &home);
    assert!(stderr.contains("InvalidConfiguration"), "stderr:\n{}", stderr);
}

#[test]
fn test_unsupported_token_type_fails() {
    let home = TempDir::new().expect("create temp home");
    let stderr = run_err(&["--tokenize", "-T", "saml"], &home);
    assert!(stderr.contains("UnsupportedTokenType"), "stderr:\n{}", stderr);
}

#[test]
fn test_oversized_text_reports_capacity() {
    let home = TempDir::new().expect("create temp home");
    let text = "x".repeat(3000);
    let stderr = run_err(&["-i", &text, "-e", "HIGH"], &home);
    assert!(stderr.contains("EncodingCapacityExceeded"), "stderr:\n{}", stderr);
}

#[test]
fn test_zero_scale_is_rejected() {
    let home = TempDir::new().expect("create temp home");
    let stderr = run_err(&["--scale", "0"], &home);
    assert!(stderr.contains("InvalidConfiguration"), "stderr:\n{}", stderr);
}

#[test]
fn test_config_file_sits_below_flags() {
    let home = TempDir::new().expect("create temp home");
    let config_path = home.path().join("qrgen.toml");
    fs::write(&config_path, "input_text = \"x\"\necc_level = \"EXTREME\"\n")
        .expect("write config");
    let config = config_path.to_string_lossy().to_string();

    // File value alone is invalid...
    let stderr = run_err(&["--config", &config], &home);
    assert!(stderr.contains("EXTREME"), "stderr:\n{}", stderr);

    // ...but a flag replaces it.
    let stdout = run_ok(&["--config", &config, "-e", "LOW", "-p", "console"], &home);
    assert_eq!(glyph_lines(&stdout).len(), 29);
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().expect("create temp home");
    let missing = home.path().join("nope.toml");
    let stderr = run_err(&["--config", &missing.to_string_lossy()], &home);
    assert!(stderr.contains("InvalidConfiguration"), "stderr:\n{}", stderr);
}

#[test]
fn test_huge_scale_is_rejected_without_panic() {
    let home = TempDir::new().expect("create temp home");
    let stderr = run_err(&["--scale", "4294967295"], &home);
    assert!(stderr.contains("ERROR:"), "stderr:\n{}", stderr);
    assert!(stderr.contains("InvalidConfiguration"), "stderr:\n{}", stderr);
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_large_valid_scale_still_renders() {
    let home = TempDir::new().expect("create temp home");
    let stdout = run_ok(&["--scale", "1024"], &home);
    // (21 + 8) modules * 1024 units.
    assert!(stdout.contains("29696"), "stdout:\n{}", stdout);
}

#[test]
fn test_no_tokenize_overrides_config_file() {
    let home = TempDir::new().expect("create temp home");
    let config_path = home.path().join("qrgen.toml");
    fs::write(&config_path, "tokenize = true\n").expect("write config");
    let config = config_path.to_string_lossy().to_string();

    let tokenized = run_ok(&["--config", &config, "-p", "console"], &home);
    assert!(glyph_lines(&tokenized).len() > 29);

    let plain = run_ok(
        &["--config", &config, "--no-tokenize", "-p", "console"],
        &home,
    );
    assert_eq!(glyph_lines(&plain).len(), 29);
}
