//! Integration tests for `brdocs generate`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `brdocs` binary.
fn brdocs_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("brdocs");
    path
}

fn brdocs(args: &[&str]) -> std::process::Output {
    Command::new(brdocs_bin())
        .args(args)
        .env_remove("BRDOCS_SEED")
        .output()
        .expect("run brdocs")
}

#[test]
fn generate_prints_count_lines() {
    let out = brdocs(&["generate", "cnpj", "-n", "7"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.lines().all(|l| l.contains("/0001-")), "{stdout}");
}

#[test]
fn generated_values_pass_validate() {
    let out = brdocs(&["generate", "ie", "--state", "MG", "-n", "5", "--raw"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
    let mut args = vec!["validate", "ie", "--state", "MG"];
    args.extend(stdout.lines());
    let check = brdocs(&args);
    assert_eq!(
        check.status.code(),
        Some(0),
        "generated values rejected: {}",
        String::from_utf8_lossy(&check.stdout)
    );
}

#[test]
fn seed_flag_is_reproducible() {
    let a = brdocs(&["generate", "cpf", "-n", "3", "--seed", "1234"]);
    let b = brdocs(&["generate", "cpf", "-n", "3", "--seed", "1234"]);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn seed_env_var_is_reproducible() {
    let run = || {
        Command::new(brdocs_bin())
            .args(["generate", "voter-id", "-n", "3"])
            .env("BRDOCS_SEED", "99")
            .output()
            .expect("run brdocs")
    };
    assert_eq!(run().stdout, run().stdout);
}

#[test]
fn ie_without_state_emits_unit_codes_in_json() {
    let out = brdocs(&["-f", "json", "generate", "ie", "-n", "10"]);
    assert_eq!(out.status.code(), Some(0));
    for line in String::from_utf8_lossy(&out.stdout).lines() {
        let record: serde_json::Value = serde_json::from_str(line).expect("json");
        let state = record["state"].as_str().expect("state code");
        assert_eq!(state.len(), 2, "{line}");
        assert!(record["value"].is_string(), "{line}");
    }
}

#[test]
fn zero_count_exits_2() {
    let out = brdocs(&["generate", "cpf", "-n", "0"]);
    assert_eq!(out.status.code(), Some(2));
}
