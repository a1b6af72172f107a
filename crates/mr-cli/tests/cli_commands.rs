//! End-to-end tests for the `maze-runner` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn maze_runner() -> Command {
    Command::cargo_bin("maze-runner").unwrap()
}

// ---------------------------------------------------------------------------
// flags
// ---------------------------------------------------------------------------

#[test]
fn help_lists_flags() {
    maze_runner()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--demo")
                .and(predicate::str::contains("--seed"))
                .and(predicate::str::contains("--turns")),
        );
}

#[test]
fn rejects_non_numeric_turns() {
    maze_runner()
        .args(["--demo", "--turns", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rejects_zero_turns() {
    maze_runner()
        .args(["--demo", "--turns", "0"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_runs_to_completion() {
    maze_runner()
        .args(["--demo", "--seed", "7", "--turns", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to MAZE RUNNER")
                .and(predicate::str::contains("Demo move: p"))
                .and(predicate::str::contains("You unleash a mystic pulse"))
                .and(predicate::str::contains("Final score:"))
                .and(predicate::str::contains("Revealing the final layout:")),
        );
}

#[test]
fn demo_is_reproducible_with_seed() {
    let run = || {
        maze_runner()
            .args(["--demo", "--seed", "1234", "--turns", "20"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verbose_demo_logs_to_stderr() {
    maze_runner()
        .args(["--demo", "--seed", "3", "--turns", "2", "-vv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("world generated"))
        .stdout(predicate::str::contains("world generated").not());
}

// ---------------------------------------------------------------------------
// interactive
// ---------------------------------------------------------------------------

#[test]
fn quit_ends_without_summary() {
    maze_runner()
        .args(["--seed", "5"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Your move:")
                .and(predicate::str::contains("Game over."))
                .and(predicate::str::contains("Final score:").not()),
        );
}

#[test]
fn unknown_command_reprompts() {
    maze_runner()
        .args(["--seed", "5"])
        .write_stdin("jump\nQ\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unrecognized action 'jump'")
                .and(predicate::str::contains("Game over.")),
        );
}

#[test]
fn closed_input_quits() {
    maze_runner()
        .args(["--seed", "5"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game over."));
}

#[test]
fn pulse_then_quit() {
    maze_runner()
        .args(["--seed", "11"])
        .write_stdin("p\np\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mystic pulse ready")
                .and(predicate::str::contains("For a heartbeat, the maze reveals itself"))
                .and(predicate::str::contains("Your mystic pulse is spent")),
        );
}
