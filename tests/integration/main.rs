//! Integration tests for the pawnkyc CLI
//!
//! These tests run whole verification flows against a temporary record
//! store: verify → status → override → review.


use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use pawnkyc::config::KycConfig;
use pawnkyc::core::ports::ExtractorKind;
use predicates::prelude::*;
use tempfile::TempDir;

/// TD1-style MRZ for JOHN DOE, born 1980-01-01, document AA123456
const JOHN_DOE_MRZ: &str =
    "AA123456<0UTO8001014M3001012<<<<<<<<<<<2\nDOE<<JOHN<<<<<<<<<<<<<<<<<<<<<";

/// A scratch workspace with a config file, a record store and a document
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(backend: ExtractorKind) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        let mut config = KycConfig::default();
        config.extractor.backend = backend;
        config.store.dir = dir.path().join("records");
        config.save_to(&dir.path().join("config.toml")).expect("failed to write config");

        fs::write(dir.path().join("id-card.txt"), JOHN_DOE_MRZ).expect("failed to write document");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn document(&self) -> PathBuf {
        self.path().join("id-card.txt")
    }

    fn record(&self, subject: &str) -> PathBuf {
        self.path().join("records").join(format!("{subject}.json"))
    }

    /// Command with `--config` pointed at this workspace
    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("pawnkyc"));
        cmd.arg("--config").arg(self.path().join("config.toml"));
        cmd
    }

    fn verify(&self, subject: &str, name: &str, dob: &str) -> assert_cmd::assert::Assert {
        self.cmd()
            .args(["--json", "verify", "--subject", subject, "--name", name, "--dob", dob])
            .args(["--doc-number", "AA123456", "--document"])
            .arg(self.document())
            .assert()
    }
}

#[test]
fn test_config_command_reflects_file() {
    let ws = Workspace::new(ExtractorKind::Mrz);
    ws.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend = \"mrz\""));
}

#[test]
fn test_evaluate_does_not_persist() {
    let ws = Workspace::new(ExtractorKind::Mrz);
    ws.cmd()
        .args(["--json", "evaluate", "--name", "John Doe", "--dob", "1980-01-01"])
        .args(["--doc-number", "AA123456", "--document"])
        .arg(ws.document())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"verified\""))
        .stdout(predicate::str::contains("\"provider\": \"mrz\""));

    assert!(!ws.path().join("records").exists());
}

#[test]
fn test_status_before_submission() {
    let ws = Workspace::new(ExtractorKind::Mock);
    ws.cmd()
        .args(["status", "--subject", "user-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No KYC submitted"));
}

#[test]
fn test_verify_with_mock_backend() {
    let ws = Workspace::new(ExtractorKind::Mock);
    ws.verify("user-1", "John Doe", "1980-01-01")
        .success()
        .stdout(predicate::str::contains("\"provider\": \"mock\""))
        .stdout(predicate::str::contains("\"lifecycle\": \"verified\""));

    assert!(ws.record("user-1").exists());
}

#[test]
fn test_invalid_subject_rejected() {
    let ws = Workspace::new(ExtractorKind::Mock);
    ws.verify("../user", "John Doe", "1980-01-01")
        .failure()
        .stderr(predicate::str::contains("invalid subject id"));
}
