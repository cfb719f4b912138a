//! CLI smoke tests for pawnkyc

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use super::common::JOHN_DOE_MRZ;

fn pawnkyc() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("pawnkyc"))
}

#[test]
fn test_version() {
    pawnkyc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pawnkyc"));
}

#[test]
fn test_help() {
    pawnkyc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compare what a customer entered"));
}

#[test]
fn test_no_args_shows_info() {
    pawnkyc().assert().success().stdout(predicate::str::contains("pawnkyc v"));
}

#[test]
fn test_version_json() {
    pawnkyc()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_parse_mrz_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("mrz.txt");
    fs::write(&file, JOHN_DOE_MRZ).unwrap();

    pawnkyc()
        .arg("parse-mrz")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("JOHN DOE"))
        .stdout(predicate::str::contains("1980-01-01"))
        .stdout(predicate::str::contains("AA123456"));
}

#[test]
fn test_parse_mrz_without_zone() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("note.txt");
    fs::write(&file, "just a note").unwrap();

    pawnkyc()
        .arg("parse-mrz")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No MRZ found"));
}

#[test]
fn test_parse_mrz_missing_file() {
    pawnkyc()
        .args(["parse-mrz", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_quote() {
    pawnkyc()
        .args(["quote", "--principal", "10000", "--rate", "12", "--months", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("888.49"));
}

#[test]
fn test_quote_zero_term_fails() {
    pawnkyc()
        .args(["quote", "--principal", "1000", "--rate", "5", "--months", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one month"));
}

#[test]
fn test_unknown_subcommand() {
    pawnkyc().arg("launch").assert().failure();
}
