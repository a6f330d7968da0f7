// sinoscrub/tests/cli_integration_tests.rs
//! Command-line integration tests for the `sinoscrub` binary.
//!
//! These tests execute the real binary with `assert_cmd`, covering literal
//! and file input, category selection, custom dictionary overrides, the
//! warn-and-continue policy for a missing custom dictionary, and the JSON,
//! diff and file-output paths. `tempfile` keeps every test isolated.

use std::io::Write;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Runs the `sinoscrub` binary with the given arguments.
fn run_sinoscrub(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("sinoscrub").unwrap();
    // Make log output from the spawned process visible to assertions.
    cmd.env("RUST_LOG", "debug");
    cmd.args(args);
    cmd.assert()
}

#[test]
fn test_scrubs_literal_text() {
    run_sinoscrub(&["系统正在处死进程"])
        .success()
        .stdout(predicate::str::contains("系统正在终止进程"));
}

#[test]
fn test_reads_input_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all("祝您全家升天".as_bytes())?;

    run_sinoscrub(&[file.path().to_str().unwrap()])
        .success()
        .stdout(predicate::str::contains("祝您全家幸福"));
    Ok(())
}

#[test]
fn test_category_filter_limits_dictionaries() {
    // Cultural keywords are untouched when only translation is loaded.
    run_sinoscrub(&["-c", "translation", "祝您全家升天"])
        .success()
        .stdout(predicate::str::contains("祝您全家升天"));
}

#[test]
fn test_multiple_categories_load_in_order() {
    run_sinoscrub(&["-c", "translation", "-c", "cultural", "系统处死进程后祝您升天"])
        .success()
        .stdout(predicate::str::contains("终止").and(predicate::str::contains("幸福")));
}

#[test]
fn test_custom_dict_overrides_builtin() -> Result<()> {
    let mut dict = NamedTempFile::new()?;
    dict.write_all(r#"{"处死": "结束运行"}"#.as_bytes())?;

    run_sinoscrub(&["--custom-dict", dict.path().to_str().unwrap(), "系统正在处死进程"])
        .success()
        .stdout(predicate::str::contains("系统正在结束运行进程"));
    Ok(())
}

#[test]
fn test_missing_custom_dict_warns_and_continues() {
    run_sinoscrub(&["--custom-dict", "/no/such/dict.json", "系统正在处死进程"])
        .success()
        .stdout(predicate::str::contains("系统正在终止进程"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_custom_dict_is_fatal() -> Result<()> {
    let mut dict = NamedTempFile::new()?;
    dict.write_all(b"not json at all")?;

    run_sinoscrub(&["--custom-dict", dict.path().to_str().unwrap(), "anything"])
        .failure()
        .stderr(predicate::str::contains("custom dictionary"));
    Ok(())
}

#[test]
fn test_json_output_is_machine_readable() {
    let assert = run_sinoscrub(&["--json", "系统正在处死进程"]).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["scrubbed"], "系统正在终止进程");
    assert_eq!(value["changes"][0]["keyword"], "处死");
    assert_eq!(value["changes"][0]["replacement"], "终止");
    assert_eq!(value["changes"][0]["category"], "translation");
    assert_eq!(value["changes"][0]["start"], 4);
    assert_eq!(value["changes"][0]["end"], 6);
}

#[test]
fn test_diff_view_shows_both_sides() {
    run_sinoscrub(&["--diff", "系统正在处死进程"])
        .success()
        .stdout(
            predicate::str::contains("- 系统正在处死进程")
                .and(predicate::str::contains("+ 系统正在终止进程")),
        );
}

#[test]
fn test_debug_view_reports_reasons() {
    run_sinoscrub(&["--debug", "系统正在处死进程"])
        .success()
        .stderr(
            predicate::str::contains("translation")
                .and(predicate::str::contains("avoid lethal phrasing")),
        );
}

#[test]
fn test_output_flag_writes_scrubbed_file() -> Result<()> {
    let out = NamedTempFile::new()?;

    run_sinoscrub(&["-o", out.path().to_str().unwrap(), "祝您全家升天"]).success();
    assert_eq!(std::fs::read_to_string(out.path())?, "祝您全家幸福");
    Ok(())
}

#[test]
fn test_no_arguments_prints_help() {
    Command::cargo_bin("sinoscrub")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
