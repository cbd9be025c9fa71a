//! CLI Interface E2E Tests
//!
//! These tests run the tslex binary against temporary source files and
//! check its output, diagnostics and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the tslex binary
fn tslex_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tslex"))
}

/// A command running inside `dir`, isolated from the caller's environment
fn tslex(dir: &TempDir) -> Command {
    let mut cmd = Command::new(tslex_bin());
    cmd.current_dir(dir.path())
        .env_remove("TSLEX_CONFIG")
        .env_remove("TSLEX_VERBOSE")
        .env_remove("TSLEX_NO_COLOR")
        .env_remove("TSLEX_ENV")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"));
    cmd
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write source file");
    path
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    tslex(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    tslex(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tslex"));
}

#[test]
fn test_tokens_text() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "main.ts", "const total = 1_000 + .5;\n");

    tslex(&dir)
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            "Const\n\
             Identifier total\n\
             Assignment =\n\
             NumericLiteral 1_000\n\
             Plus +\n\
             NumericLiteral .5\n\
             Semicolon ;\n",
        );
}

#[test]
fn test_tokens_json() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "main.ts", "let s = \"hi\";");

    let output = tslex(&dir)
        .args(["tokens", "--format", "json"])
        .arg(&input)
        .output()
        .expect("Failed to run tslex");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let tokens = value[0]["tokens"].as_array().expect("tokens array");
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[3]["kind"], "StringLiteral");
    assert_eq!(tokens[3]["lexeme"], "\"hi\"");
    assert!(value[0]["errors"].as_array().expect("errors array").is_empty());
}

#[test]
fn test_tokens_no_comments() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "main.ts", "// header\nx /* inline */");

    tslex(&dir)
        .args(["tokens", "--no-comments"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Identifier x\n");
}

#[test]
fn test_tokens_reports_errors() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "bad.ts", "let a = 1;\nlet b = 0123;\n");

    tslex(&dir)
        .args(["--no-color", "tokens"])
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid"))
        .stderr(predicate::str::contains(
            "bad.ts:2 - error TS1121: Octal literals are not supported",
        ));
}

#[test]
fn test_tokens_quiet_suppresses_diagnostics() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "bad.ts", "@");

    tslex(&dir)
        .args(["tokens", "--quiet"])
        .arg(&input)
        .assert()
        .code(1)
        .stdout("Invalid\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_tokens_from_stdin() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    tslex(&dir)
        .args(["tokens", "-"])
        .write_stdin("return null")
        .assert()
        .success()
        .stdout("Return\nNullLiteral\n");
}

#[test]
fn test_check_clean() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let a = write_source(&dir, "a.ts", "export interface P { x: number; }");
    let b = write_source(&dir, "b.ts", "let y = a?.b ?? 0;");

    tslex(&dir)
        .arg("check")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("2 file(s) checked, 0 with errors\n");
}

#[test]
fn test_check_failing() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let good = write_source(&dir, "good.ts", "x;");
    let bad = write_source(&dir, "bad.ts", "/* never closed");

    tslex(&dir)
        .args(["--no-color", "check"])
        .arg(&good)
        .arg(&bad)
        .assert()
        .code(1)
        .stdout("2 file(s) checked, 1 with errors\n")
        .stderr(predicate::str::contains("error TS1010: '*/' expected."));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    tslex(&dir)
        .args(["check", "does-not-exist.ts"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: Cannot read does-not-exist.ts"));
}

#[test]
fn test_config_file_in_current_dir() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "tslex.toml", "[output]\nformat = \"json\"\n");
    let input = write_source(&dir, "main.ts", "x");

    tslex(&dir)
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_explicit_config_quiet() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = write_source(&dir, "custom.toml", "[report]\nquiet = true\n");
    let input = write_source(&dir, "bad.ts", "'open");

    tslex(&dir)
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_config() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = write_source(&dir, "broken.toml", "[output\n");
    let input = write_source(&dir, "main.ts", "x");

    tslex(&dir)
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_codes_lists_table() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    tslex(&dir)
        .arg("codes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("TS1002  Unterminated string literal.")
                .and(predicate::str::contains("TS6188  Numeric separators are not allowed here.")),
        );
}

#[test]
fn test_codes_single_and_unknown() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    tslex(&dir)
        .args(["codes", "1121"])
        .assert()
        .success()
        .stdout("TS1121  Octal literals are not supported\n");

    tslex(&dir)
        .args(["codes", "TS4242"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: Unknown error code: TS4242"));
}
