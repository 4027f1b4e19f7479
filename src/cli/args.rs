use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "qtiseed",
    version,
    about = "Seed QTI 3.0 assessment result XML files from a candidate roster"
)]
pub struct CliArgs {
    /// Roster CSV file, or "-" to read standard input
    #[arg(short, long, value_name = "PATH")]
    pub roster: PathBuf,

    /// Assessment test XML containing item references
    #[arg(short, long, value_name = "PATH")]
    pub assessment_test: PathBuf,

    /// Output directory (default: qti-results next to the roster, or in the
    /// working directory when the roster comes from stdin)
    #[arg(short, long, visible_alias = "out-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Identifier written to every testResult element
    #[arg(long, default_value = qtiseed::core::params::DEFAULT_TEST_RESULT_ID)]
    pub test_result_id: String,

    /// Datestamp for testResult and itemResult elements: an ISO 8601 value or
    /// "now" for the current UTC time. Omitted from the output when not given.
    #[arg(long, value_name = "ISO8601|now")]
    pub test_result_datestamp: Option<String>,

    /// Add a materialTitle session identifier to every document
    #[arg(long, value_name = "TITLE")]
    pub material_title: Option<String>,

    /// Show the output plan without writing anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print a JSON summary to stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Overwrite existing output files
    #[arg(short, long, visible_alias = "yes", short_alias = 'y', default_value_t = false)]
    pub force: bool,

    /// Only print errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
