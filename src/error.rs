//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps roster and assessment test reader errors, and provides semantic variants
//! for argument validation and output directory conflicts.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Roster(#[from] crate::io::RosterError),

    #[error("{0}")]
    AssessmentTest(#[from] crate::io::AssessmentTestError),

    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid test result datestamp: {value} (expected ISO 8601 or \"now\")")]
    InvalidDatestamp { value: String },

    #[error("Output file already exists: {} (use --force to overwrite)", .path.display())]
    OutputExists { path: PathBuf },

    #[error("Output path exists and is not a directory: {}", .path.display())]
    OutputDirNotDirectory { path: PathBuf },

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}
