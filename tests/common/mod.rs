#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ROSTER_CSV: &str = "candidate_number,candidate_name\n1001,山田太郎\n1002,鈴木花子\n";

pub const ASSESSMENT_TEST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<qti-assessment-test xmlns="http://www.imsglobal.org/xsd/imsqtiasi_v3p0" identifier="mock-test" title="Mock">
  <qti-test-part identifier="part-1" navigation-mode="linear" submission-mode="individual">
    <qti-assessment-section identifier="section-1" title="Section 1" visible="true">
      <qti-assessment-item-ref identifier="item-001" href="items/item-001.xml"/>
      <qti-assessment-item-ref identifier="item-002" href="items/item-002.xml"/>
    </qti-assessment-section>
  </qti-test-part>
</qti-assessment-test>
"#;

pub struct TestEnv {
    tmp: TempDir,
    pub roster: PathBuf,
    pub assessment_test: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_roster(ROSTER_CSV)
    }

    pub fn with_roster(csv: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let roster = tmp.path().join("roster.csv");
        let assessment_test = tmp.path().join("assessment-test.xml");
        fs::write(&roster, csv).expect("write roster");
        fs::write(&assessment_test, ASSESSMENT_TEST_XML).expect("write assessment test");
        Self {
            tmp,
            roster,
            assessment_test,
        }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Default output directory for a file roster
    pub fn output_dir(&self) -> PathBuf {
        self.root().join("qti-results")
    }

    pub fn output_file(&self, result_id: &str) -> PathBuf {
        self.output_dir()
            .join(format!("assessmentResult-{result_id}.xml"))
    }

    /// Command preloaded with the roster and assessment test paths
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("qtiseed");
        cmd.current_dir(self.root())
            .env_remove("RUST_LOG")
            .arg("--roster")
            .arg(&self.roster)
            .arg("--assessment-test")
            .arg(&self.assessment_test);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn output_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries.map(|e| e.expect("dir entry").path()).collect();
        files.sort();
        files
    }
}
