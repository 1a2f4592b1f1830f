//! CLI end-to-end tests that invoke the compiled `mtg-mcp` binary.
//!
//! These tests use `env!("CARGO_BIN_EXE_mtg-mcp")` to locate the binary and
//! `std::process::Command` to drive it over stdio.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use mtg_test_utils::TestCorpus;
use serde_json::Value;
use tempfile::TempDir;

/// Returns the path to the compiled `mtg-mcp` binary.
fn mtg_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mtg-mcp"))
}

/// Run the server over `data_root`, feed it `input`, and collect its output.
fn serve(data_root: &Path, input: &str) -> Output {
    let mut child = Command::new(mtg_bin())
        .args(["--data-root", data_root.to_str().unwrap()])
        .args(["--scryfall-url", "http://127.0.0.1:9"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn mtg-mcp");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("mtg-mcp did not exit")
}

fn responses(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout must carry only JSON-RPC"))
        .collect()
}

#[test]
fn test_help_exits_zero() {
    let out = Command::new(mtg_bin())
        .arg("--help")
        .output()
        .expect("failed to run mtg-mcp --help");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("build-corpus"), "got:\n{stdout}");
}

#[test]
fn test_session_over_stdio() {
    let corpus = TestCorpus::populated();
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"e2e","version":"0"}}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "this is not json",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_rule","arguments":{"rule_number":"105"}}}"#,
    ]
    .join("\n")
        + "\n";

    let out = serve(corpus.root(), &input);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let responses = responses(&out);
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "mtg-mcp");
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 7);
    assert_eq!(responses[2]["error"]["code"], -32700);
    assert!(
        responses[3]["result"]["content"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("105. Colors")
    );
}

#[test]
fn test_logs_go_to_stderr() {
    let corpus = TestCorpus::new();
    let out = serve(corpus.root(), "");

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Starting mtg-mcp server"));
}

#[test]
fn test_invalid_config_fails_startup() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "data_root = [").unwrap();

    let out = Command::new(mtg_bin())
        .args(["--config", config.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run mtg-mcp");

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("config.toml"));
}

#[test]
fn test_build_corpus_from_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("rules.txt");
    fs::write(
        &input,
        "Contents\n1. Game Concepts\n100. General\nGlossary\n\n\
         1. Game Concepts\n100. General\n100.1. These rules apply.\n\n\
         Glossary\n\nCombat Damage\nDamage dealt during combat.\n\nCredits\n",
    )
    .unwrap();
    let out_dir = temp.path().join("data");

    let out = Command::new(mtg_bin())
        .args(["build-corpus", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out_dir)
        .output()
        .expect("failed to run build-corpus");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read_to_string(out_dir.join("rules/100.txt")).unwrap(),
        "100. General\n100.1. These rules apply."
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("glossary/combat_damage.txt")).unwrap(),
        "Damage dealt during combat."
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("index.txt")).unwrap(),
        "1. Game Concepts\n100. General"
    );
}
