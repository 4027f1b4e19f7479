use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use qtiseed::core::params::{RunOptions, absolutize, resolve_datestamp};
use qtiseed::{RosterSource, RunMode, RunReport};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(args: &CliArgs) {
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Turn parsed arguments into `RunOptions`, applying defaults against `cwd`
fn resolve_options(args: CliArgs, cwd: &Path) -> Result<RunOptions, AppError> {
    let roster = RosterSource::from_arg(&args.roster);
    let mut options = RunOptions::new(roster, absolutize(&args.assessment_test, cwd), cwd);

    if let Some(dir) = args.output_dir {
        if dir.as_os_str().is_empty() {
            return Err(AppError::InvalidOutputDir {
                path: dir.display().to_string(),
            });
        }
        options.output_dir = absolutize(&dir, cwd);
    }

    options.test_result_id = args.test_result_id;
    options.test_result_datestamp = args
        .test_result_datestamp
        .as_deref()
        .map(|raw| resolve_datestamp(raw, Utc::now()))
        .transpose()?;
    options.material_title = args.material_title;
    options.mode = if args.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Write
    };
    options.json = args.json;
    options.force = args.force;
    options.quiet = args.quiet;
    Ok(options)
}

fn print_summary(report: &RunReport, options: &RunOptions) -> Result<(), AppError> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    if options.quiet {
        return Ok(());
    }

    match report.mode {
        RunMode::DryRun => {
            eprintln!(
                "Dry run: would write {} file(s) to {}",
                report.outputs.len(),
                report.output_dir.display()
            );
            for entry in &report.outputs {
                eprintln!("  {} -> {}", entry.result_id, entry.path.display());
            }
        }
        RunMode::Write => eprintln!(
            "Wrote {} file(s) to {}",
            report.outputs.len(),
            report.output_dir.display()
        ),
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(&args);

    let cwd: PathBuf = std::env::current_dir().map_err(AppError::WorkingDirectory)?;
    let options = resolve_options(args, &cwd)?;
    debug!("Resolved options: {:?}", options);
    info!("Roster: {}", options.roster);
    info!("Output directory: {:?}", options.output_dir);

    let report = qtiseed::run(&options)?;
    print_summary(&report, &options)
}
