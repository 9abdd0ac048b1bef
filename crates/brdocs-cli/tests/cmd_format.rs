//! Integration tests for `brdocs format`, `unformat`, `mask`, `region` and
//! `states`.
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

fn brdocs(args: &[&str]) -> (Option<i32>, String) {
    let out = Command::new(brdocs_bin())
        .args(args)
        .output()
        .expect("run brdocs");
    (
        out.status.code(),
        String::from_utf8_lossy(&out.stdout).into_owned(),
    )
}

// ---------------------------------------------------------------------------
// format / unformat
// ---------------------------------------------------------------------------

#[test]
fn format_applies_mask() {
    assert_eq!(
        brdocs(&["format", "cei", "112223333347"]),
        (Some(0), "11.222.33333/47\n".to_owned())
    );
}

#[test]
fn format_wrong_length_exits_1() {
    let (code, stdout) = brdocs(&["format", "cpf", "123"]);
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
}

#[test]
fn unformat_strips_punctuation() {
    assert_eq!(
        brdocs(&["unformat", "ie", "-s", "SP", "110.042.490.114"]),
        (Some(0), "110042490114\n".to_owned())
    );
}

// ---------------------------------------------------------------------------
// mask
// ---------------------------------------------------------------------------

#[test]
fn mask_prints_state_mask() {
    assert_eq!(
        brdocs(&["mask", "ie", "--state", "AC"]),
        (Some(0), "99.999.999/999-99\n".to_owned())
    );
}

#[test]
fn mask_ie_without_state_exits_2() {
    let (code, _) = brdocs(&["mask", "ie"]);
    assert_eq!(code, Some(2));
}

// ---------------------------------------------------------------------------
// region
// ---------------------------------------------------------------------------

#[test]
fn region_for_voter_id() {
    assert_eq!(
        brdocs(&["region", "voter-id", "1234567823-99"]),
        (Some(0), "RO\n".to_owned())
    );
}

#[test]
fn region_for_invalid_cpf_exits_1() {
    let (code, stdout) = brdocs(&["region", "cpf", "681.113.352-03"]);
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
}

#[test]
fn region_for_cnpj_exits_2() {
    let (code, _) = brdocs(&["region", "cnpj", "86.507.991/0001-18"]);
    assert_eq!(code, Some(2));
}

// ---------------------------------------------------------------------------
// states
// ---------------------------------------------------------------------------

#[test]
fn states_lists_27_units() {
    let (code, stdout) = brdocs(&["states"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.lines().count(), 27);
    assert!(stdout.contains("São Paulo"), "{stdout}");
}

#[test]
fn version_flag_prints_version() {
    let (code, stdout) = brdocs(&["--version"]);
    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("brdocs "), "{stdout}");
}
