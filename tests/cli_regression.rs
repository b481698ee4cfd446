// Regression tests for the `stout` binary: exit codes and rendered output.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn stout() -> Command {
    let mut cmd = Command::cargo_bin("stout").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_parse_prints_validators() {
    stout()
        .args(["parse", "required|max:10,error[Too long]"])
        .assert()
        .success()
        .stdout(contains("required").and(contains("max")).and(contains("Too long")));
}

#[test]
fn cli_parse_json_lists_cores() {
    stout()
        .args(["parse", "--json", "size:1,3"])
        .assert()
        .success()
        .stdout(contains("\"kind\": \"size\"").and(contains("\"1\"")).and(contains("\"3\"")));
}

#[test]
fn cli_reports_miette_diagnostics_for_unknown_validator() {
    stout()
        .args(["parse", "required|nope:1"])
        .assert()
        .failure()
        .stderr(contains("not registered").or(contains("stout::unregistered")));
}

#[test]
fn cli_check_exit_code_follows_outcome() {
    stout()
        .args(["check", "required|max:5", "abc"])
        .assert()
        .success()
        .stdout(contains("valid"));

    stout()
        .args(["check", "required|max:5", "much too long"])
        .assert()
        .code(1)
        .stdout(contains("Must be at most 5."));
}

#[test]
fn cli_registers_hint_for_its_own_use() {
    stout()
        .args(["check", "hint:Use your work address", "anything"])
        .assert()
        .success();
}

#[test]
fn cli_lists_validators_and_states() {
    stout()
        .arg("list-validators")
        .assert()
        .success()
        .stdout(contains("max").and(contains("size")).and(contains("required")));

    stout()
        .arg("list-states")
        .assert()
        .success()
        .stdout(contains("error").and(contains("warning")).and(contains("valid")));
}

#[test]
fn cli_config_adds_custom_states() {
    let config = "tests/stout_states.yaml";
    fs::write(config, "states: [pending]\n").unwrap();

    stout()
        .args(["--config", config, "explain", "required pending[Checking]"])
        .assert()
        .success()
        .stdout(contains("pending: Checking"));

    let _ = fs::remove_file(config);
}

#[test]
fn cli_rejects_a_broken_config() {
    let config = "tests/stout_broken.yaml";
    fs::write(config, "no_such_key: true\n").unwrap();

    stout().args(["--config", config, "list-states"]).assert().code(2);

    let _ = fs::remove_file(config);
}

#[test]
fn cli_rejects_unscannable_state_names() {
    let config = "tests/stout_bad_state.yaml";
    fs::write(config, "states: [\"in|review\"]\n").unwrap();

    stout()
        .args(["--config", config, "list-states"])
        .assert()
        .code(2)
        .stderr(contains("in|review"));

    let _ = fs::remove_file(config);
}
