//! Process-level behavior of the worker binary: reserved exit code, stderr
//! diagnostics, and the gate running before any input is touched.

mod common;

use common::{garbage_input, well_formed_jpeg};
use imago::{PROPAGATION_EXIT_CODE, REQUIRED_KEYS};
use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_imago");

/// A worker command with a scrubbed environment, so stray `IMAGO_*` keys on
/// the host can never mask a propagation failure.
fn worker() -> Command {
    let mut command = Command::new(BIN);
    command.env_clear();
    command
}

/// A worker whose driver forwarded everything it should.
fn provisioned() -> Command {
    let mut command = worker();
    command
        .env("IMAGO_RSS_LIMIT_MB", "2048")
        .env("IMAGO_TIMEOUT_SECS", "25");
    command
}

fn run_to_output(command: &mut Command) -> Output {
    command.output().expect("worker binary should spawn")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_corpus_file(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("corpus file should be writable");
    path
}

// ============================================================================
// SCENARIO A: propagation failure
// ============================================================================

#[test]
fn missing_keys_terminate_with_reserved_code_before_any_input() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus_file(dir.path(), "input.bin", &garbage_input());

    let output = run_to_output(worker().arg("run").arg(&corpus));

    assert_eq!(output.status.code(), Some(PROPAGATION_EXIT_CODE));
    assert!(
        stderr_of(&output).contains("required configuration did not reach the worker process"),
        "stderr must identify the failure as a propagation problem"
    );
    // The gate fires before the first file is read: no per-input report.
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn diagnostic_lists_every_missing_key() {
    let output = run_to_output(worker().arg("check"));
    assert_eq!(output.status.code(), Some(PROPAGATION_EXIT_CODE));
    let stderr = stderr_of(&output);
    for key in REQUIRED_KEYS {
        assert!(stderr.contains(key), "stderr must name {key}");
    }
}

#[test]
fn diagnostic_names_only_the_keys_that_are_missing() {
    let output = run_to_output(
        worker()
            .env("IMAGO_RSS_LIMIT_MB", "2048")
            .arg("check"),
    );
    assert_eq!(output.status.code(), Some(PROPAGATION_EXIT_CODE));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("IMAGO_TIMEOUT_SECS"));
    assert!(!stderr.contains("IMAGO_RSS_LIMIT_MB"));
}

#[test]
fn empty_value_is_a_propagation_failure() {
    let output = run_to_output(
        worker()
            .env("IMAGO_RSS_LIMIT_MB", "")
            .env("IMAGO_TIMEOUT_SECS", "25")
            .arg("check"),
    );
    assert_eq!(output.status.code(), Some(PROPAGATION_EXIT_CODE));
}

// ============================================================================
// P2 + SCENARIOS B/C at the process boundary
// ============================================================================

#[test]
fn provisioned_worker_passes_the_check() {
    let output = run_to_output(provisioned().arg("check"));
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("configuration propagation verified"));
}

#[test]
fn check_json_dumps_the_captured_snapshot() {
    let output = run_to_output(provisioned().args(["check", "--json"]));
    assert_eq!(output.status.code(), Some(0));

    let snapshot: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("snapshot dump must be valid JSON");
    for key in REQUIRED_KEYS {
        assert!(snapshot.get(key).is_some(), "dump must carry {key}");
    }
}

#[test]
fn malformed_corpus_file_replays_as_benign() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus_file(dir.path(), "garbage.bin", &garbage_input());

    let output = run_to_output(provisioned().arg("run").arg(&corpus));
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("rejected"));
}

#[test]
fn well_formed_corpus_file_replays_as_ok() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus_file(dir.path(), "sample.jpg", &well_formed_jpeg());

    let output = run_to_output(provisioned().arg("run").arg(&corpus));
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains(": ok"));
}

// ============================================================================
// RESERVED-CODE DISJOINTNESS
// ============================================================================

#[test]
fn driver_side_errors_do_not_reuse_the_reserved_code() {
    // Unreadable input file: a driver-side problem, not a setup failure.
    let output = run_to_output(provisioned().args(["run", "/nonexistent/corpus.bin"]));
    let code = output.status.code().expect("worker should exit, not die to a signal");
    assert_ne!(code, PROPAGATION_EXIT_CODE);
    assert_ne!(code, 0);
}

#[test]
fn usage_errors_do_not_reuse_the_reserved_code() {
    // clap rejects the empty command line with its own exit code.
    let output = run_to_output(&mut worker());
    let code = output.status.code().expect("worker should exit, not die to a signal");
    assert_ne!(code, PROPAGATION_EXIT_CODE);
    assert_ne!(code, 0);
}
