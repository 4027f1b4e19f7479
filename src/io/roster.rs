use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub const REQUIRED_COLUMNS: [&str; 2] = ["candidate_number", "candidate_name"];
pub const OPTIONAL_COLUMNS: [&str; 3] = ["candidate_account", "candidate_id", "result_id"];

/// Errors encountered when reading a candidate roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read roster from stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Roster is empty")]
    Empty,
    #[error("Roster has a header but no candidate rows")]
    NoRecords,
    #[error("Roster is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("Roster header must be on the first line; found a blank line before it")]
    BlankBeforeHeader,
    #[error("Row {row}: blank rows are not allowed")]
    BlankRow { row: usize },
    #[error("Row {row}: candidate_number is required")]
    MissingCandidateNumber { row: usize },
    #[error("Row {row}: candidate_number must include at least one digit")]
    CandidateNumberWithoutDigit { row: usize },
    #[error("Row {row}: candidate_name is required")]
    MissingCandidateName { row: usize },
    #[error("Row {row}: result_id must not contain path separators: {value}")]
    UnsafeResultId { row: usize, value: String },
    #[error("Row {row}: duplicate result_id: {value}")]
    DuplicateResultId { row: usize, value: String },
}

/// Where the roster CSV comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    Stdin,
    File(PathBuf),
}

impl RosterSource {
    /// `-` selects standard input, anything else is a file path
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            RosterSource::Stdin
        } else {
            RosterSource::File(arg.to_path_buf())
        }
    }
}

impl std::fmt::Display for RosterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterSource::Stdin => write!(f, "<stdin>"),
            RosterSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One validated candidate row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub candidate_number: String,
    pub candidate_name: String,
    pub candidate_account: Option<String>,
    pub candidate_id: Option<String>,
    /// `result_id` column when non-empty, otherwise the candidate number
    pub result_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RosterRow {
    candidate_number: Option<String>,
    candidate_name: Option<String>,
    candidate_account: Option<String>,
    candidate_id: Option<String>,
    result_id: Option<String>,
}

/// Read and validate the roster from a file or standard input
pub fn read_roster(source: &RosterSource) -> Result<Vec<RosterRecord>, RosterError> {
    let text = match source {
        RosterSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(RosterError::Stdin)?;
            text
        }
        RosterSource::File(path) => fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.clone(),
            source,
        })?,
    };

    let records = parse_roster(&text)?;
    info!("Read {} candidate(s) from {}", records.len(), source);
    Ok(records)
}

/// Parse roster CSV text. Rows are validated in order and the first failure wins.
pub fn parse_roster(text: &str) -> Result<Vec<RosterRecord>, RosterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(RosterError::Empty);
    }
    if let Some(row) = first_blank_row(text) {
        return Err(if row == 0 {
            RosterError::BlankBeforeHeader
        } else {
            RosterError::BlankRow { row }
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(RosterError::MissingColumn(column));
        }
    }
    for column in headers.iter() {
        if !REQUIRED_COLUMNS.contains(&column) && !OPTIONAL_COLUMNS.contains(&column) {
            debug!("Ignoring unrecognized roster column `{}`", column);
        }
    }

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    for (index, row) in reader.deserialize::<RosterRow>().enumerate() {
        let record = validate_row(row?, index + 1)?;
        if !seen.insert(record.result_id.clone()) {
            return Err(RosterError::DuplicateResultId {
                row: index + 1,
                value: record.result_id,
            });
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(RosterError::NoRecords);
    }
    Ok(records)
}

fn validate_row(row: RosterRow, index: usize) -> Result<RosterRecord, RosterError> {
    let candidate_number = non_empty(row.candidate_number)
        .ok_or(RosterError::MissingCandidateNumber { row: index })?;
    if !candidate_number.chars().any(|c| c.is_ascii_digit()) {
        return Err(RosterError::CandidateNumberWithoutDigit { row: index });
    }
    let candidate_name =
        non_empty(row.candidate_name).ok_or(RosterError::MissingCandidateName { row: index })?;

    let result_id = non_empty(row.result_id).unwrap_or_else(|| candidate_number.clone());
    if result_id.contains(|c: char| c == '/' || c == '\\') {
        return Err(RosterError::UnsafeResultId {
            row: index,
            value: result_id,
        });
    }

    Ok(RosterRecord {
        candidate_number,
        candidate_name,
        candidate_account: non_empty(row.candidate_account),
        candidate_id: non_empty(row.candidate_id),
        result_id,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Row number (0 = header) of the first empty line outside quoted fields.
/// Line terminators at the very end of the input are ignored.
fn first_blank_row(text: &str) -> Option<usize> {
    let body = text.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let mut chars = body.chars().peekable();
    let mut in_quotes = false;
    let mut line_empty = true;
    let mut row = 0;

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                line_empty = false;
            }
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if line_empty {
                    return Some(row);
                }
                row += 1;
                line_empty = true;
            }
            _ => line_empty = false,
        }
    }
    None
}
