use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid output directory: {path:?}")]
    InvalidOutputDir { path: String },

    #[error("Cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("Failed to encode JSON summary: {0}")]
    Summary(#[from] serde_json::Error),

    #[error(transparent)]
    Run(#[from] qtiseed::Error),
}
