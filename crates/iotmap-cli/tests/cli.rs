//! Smoke tests for the iotmap binary surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_subcommands() {
    Command::cargo_bin("iotmap")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("map"))
        .stdout(predicate::str::contains("count"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn empty_country_is_rejected_before_any_request() {
    Command::cargo_bin("iotmap")
        .unwrap()
        .args(["map", "   ", "23"])
        .env_remove("SHODAN_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid query syntax"));
}

#[test]
fn bad_center_is_a_usage_error() {
    Command::cargo_bin("iotmap")
        .unwrap()
        .args(["map", "GB", "23", "--center", "not-a-pair"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected lat,lon"));
}
