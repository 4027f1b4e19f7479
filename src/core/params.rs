use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};
use crate::io::roster::RosterSource;
use crate::types::RunMode;

pub const DEFAULT_TEST_RESULT_ID: &str = "assessment-test";
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "qti-results";
pub const NOW_LITERAL: &str = "now";

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub roster: RosterSource,
    pub assessment_test: PathBuf,
    /// Absolute output directory
    pub output_dir: PathBuf,
    pub test_result_id: String,
    /// Already resolved; `now` never reaches this field
    pub test_result_datestamp: Option<String>,
    pub material_title: Option<String>,
    pub mode: RunMode,
    pub json: bool,
    /// Overwrite existing output files
    pub force: bool,
    pub quiet: bool,
}

impl RunOptions {
    /// Options with defaults applied, relative to `cwd`
    pub fn new(roster: RosterSource, assessment_test: PathBuf, cwd: &Path) -> Self {
        let output_dir = default_output_dir(&roster, cwd);
        Self {
            roster,
            assessment_test,
            output_dir,
            test_result_id: DEFAULT_TEST_RESULT_ID.to_string(),
            test_result_datestamp: None,
            material_title: None,
            mode: RunMode::Write,
            json: false,
            force: false,
            quiet: false,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.mode == RunMode::DryRun
    }
}

/// `qti-results` next to the roster file, or under `cwd` for stdin
pub fn default_output_dir(roster: &RosterSource, cwd: &Path) -> PathBuf {
    match roster {
        RosterSource::Stdin => cwd.join(DEFAULT_OUTPUT_DIR_NAME),
        RosterSource::File(path) => {
            let parent = path.parent().unwrap_or_else(|| Path::new(""));
            absolutize(&parent.join(DEFAULT_OUTPUT_DIR_NAME), cwd)
        }
    }
}

pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Resolve a datestamp argument. The literal `now` becomes the given instant
/// as RFC 3339 UTC with second precision. Anything else must be an ISO 8601
/// date-time or date and is kept verbatim.
pub fn resolve_datestamp(raw: &str, now: DateTime<Utc>) -> Result<String> {
    if raw == NOW_LITERAL {
        return Ok(now.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    let valid = DateTime::parse_from_rfc3339(raw).is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok();
    if valid {
        Ok(raw.to_string())
    } else {
        Err(Error::InvalidDatestamp {
            value: raw.to_string(),
        })
    }
}
