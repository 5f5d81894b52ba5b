use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_random_challenge"))
}

#[test]
fn shows_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("random_challenge"));
}

#[test]
fn seeded_generation_is_reproducible() {
    let first = cmd()
        .args(["--max", "100", "--count", "5", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("随机结果："))
        .get_output()
        .stdout
        .clone();

    cmd()
        .args(["--max", "100", "--count", "5", "--seed", "42"])
        .assert()
        .success()
        .stdout(first);
}

#[test]
fn blank_max_is_rejected_at_the_gate() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a well-formed integer"));
}

#[test]
fn explicit_zero_max_prints_an_empty_result() {
    cmd()
        .args(["--min", "-5", "--max", "0", "--count", "2"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn oversized_distinct_request_fails_with_the_named_reason() {
    cmd()
        .args(["--min", "1", "--max", "3", "--count", "4", "--non-repetitive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("distinct values"));
}

#[test]
fn json_format_emits_the_tagged_outcome() {
    cmd()
        .args(["--max", "9", "--count", "3", "--seed", "7", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"generated\""));
}
