//! Integration tests for the `droll` CLI.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn droll() -> Command {
    let mut cmd = Command::cargo_bin("droll").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("DROLL_LOG").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = droll().args(args).output().unwrap();
    assert!(output.status.success(), "droll {args:?} failed");
    String::from_utf8(output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// rolling
// ---------------------------------------------------------------------------

#[test]
fn rolls_a_code() {
    droll()
        .args(["3d6+2", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^3d6\+2: \[[1-6], [1-6], [1-6]\] \+ 2 = \d+\n$").unwrap());
}

#[test]
fn plain_code_shows_plus_zero() {
    droll()
        .args(["d20", "-s", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^d20: \[\d+\] \+ 0 = \d+\n$").unwrap());
}

#[test]
fn negative_modifier() {
    droll()
        .args(["d4-10", "-s", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^d4-10: \[[1-4]\] - 10 = -\d\n$").unwrap());
}

#[test]
fn same_seed_same_rolls() {
    let first = stdout_of(&["4x6+1", "2e6", "4k6.3", "--seed", "7", "-n", "5"]);
    let second = stdout_of(&["4x6+1", "2e6", "4k6.3", "--seed", "7", "-n", "5"]);
    assert_eq!(first, second);
}

#[test]
fn several_codes_in_order() {
    let out = stdout_of(&["d6", "2k20", "3N6.3", "-s", "3"]);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("d6: ["));
    assert!(lines[1].starts_with("2k20: ["));
    assert!(lines[2].starts_with("3N6.3: ["));
}

#[test]
fn times_repeats_each_code() {
    let out = stdout_of(&["d6", "d8", "-n", "3", "-s", "5"]);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[..3].iter().all(|l| l.starts_with("d6: ")));
    assert!(lines[3..].iter().all(|l| l.starts_with("d8: ")));
}

#[test]
fn total_only() {
    let out = stdout_of(&["3d6", "--total-only", "-n", "20", "-s", "11"]);
    for line in out.lines() {
        let total: i64 = line.parse().unwrap();
        assert!((3..=18).contains(&total));
    }
}

#[test]
fn json_output() {
    let out = stdout_of(&["2d03+1", "--json", "-s", "9"]);
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["code"], "2d03+1");
    assert_eq!(value["sign"], "+");
    assert_eq!(value["modifier"], 1);

    let rolls = value["rolls"].as_array().unwrap();
    assert_eq!(rolls.len(), 2);
    let sum: i64 = rolls.iter().map(|v| v.as_i64().unwrap()).sum();
    assert!(rolls.iter().all(|v| (0..=3).contains(&v.as_i64().unwrap())));
    assert_eq!(value["total"], sum + 1);
}

#[test]
fn json_conflicts_with_total_only() {
    droll()
        .args(["d6", "--json", "--total-only"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// bad codes
// ---------------------------------------------------------------------------

#[test]
fn degenerate_code_fails() {
    droll()
        .arg("0d6")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bad die code: 0d6"))
        .stderr(predicate::str::contains("at least one die"));
}

#[test]
fn malformed_code_points_at_problem() {
    droll()
        .arg("3z6")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown die type 'z'"))
        .stderr(predicate::str::contains("bad die code: 3z6"));
}

#[test]
fn missing_faces_is_bad() {
    for code in ["d", "1d", "d0"] {
        droll()
            .arg(code)
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!("bad die code: {code}")));
    }
}

#[test]
fn good_codes_still_roll_next_to_bad_ones() {
    droll()
        .args(["d6", "d1", "2d4", "-s", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("d6: ["))
        .stdout(predicate::str::contains("2d4: ["))
        .stderr(predicate::str::contains("bad die code: d1"))
        .stderr(predicate::str::contains("1 bad die code"));
}

// ---------------------------------------------------------------------------
// misc
// ---------------------------------------------------------------------------

#[test]
fn version() {
    droll()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("droll 1.0.1"));
}

#[test]
fn no_codes_is_an_error() {
    droll().assert().failure();
}

#[test]
fn verbose_logs_to_stderr() {
    droll()
        .args(["d6", "-v", "-s", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed die code"));
}
