//! High-level, ergonomic library API: read and validate both inputs into a
//! `PreparedRun`, then either report the plan (dry run) or write one seed
//! document per candidate. Prefer these entrypoints over the low-level
//! readers and writers when embedding qtiseed.
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::params::RunOptions;
use crate::core::plan::{OutputPlanEntry, plan_outputs};
use crate::error::{Error, Result};
use crate::io::assessment_test::read_item_identifiers;
use crate::io::roster::{RosterRecord, read_roster};
use crate::io::writers::assessment_result::{RenderContext, render_assessment_result};
use crate::types::RunMode;

/// Validated inputs and the output plan, before anything is written
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub records: Vec<RosterRecord>,
    pub item_identifiers: Vec<String>,
    /// Parallel to `records`
    pub plan: Vec<OutputPlanEntry>,
}

/// Run summary, also the machine-readable `--json` payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub mode: RunMode,
    pub output_dir: PathBuf,
    pub outputs: Vec<OutputPlanEntry>,
}

/// Read the roster, extract item identifiers and compute the output plan.
/// Touches nothing on disk beyond reading the two inputs.
pub fn prepare_run(options: &RunOptions) -> Result<PreparedRun> {
    let records = read_roster(&options.roster)?;
    let item_identifiers = read_item_identifiers(&options.assessment_test)?;
    let plan = plan_outputs(&options.output_dir, &records);
    Ok(PreparedRun {
        records,
        item_identifiers,
        plan,
    })
}

/// Create the output directory and fail on the first planned file that
/// already exists, unless `force` is set. Runs before any document is written.
pub fn ensure_output_dir(options: &RunOptions, plan: &[OutputPlanEntry]) -> Result<()> {
    let dir = &options.output_dir;
    if dir.exists() && !dir.is_dir() {
        return Err(Error::OutputDirNotDirectory { path: dir.clone() });
    }
    fs::create_dir_all(dir)?;

    for entry in plan {
        if entry.path.exists() {
            if !options.force {
                return Err(Error::OutputExists {
                    path: entry.path.clone(),
                });
            }
            debug!("Overwriting existing file: {:?}", entry.path);
        }
    }
    Ok(())
}

/// Render and write every planned document in plan order. Files written
/// before a failure stay on disk.
pub fn write_outputs(prepared: &PreparedRun, options: &RunOptions) -> Result<()> {
    ensure_output_dir(options, &prepared.plan)?;

    let ctx = RenderContext {
        test_result_id: &options.test_result_id,
        datestamp: options.test_result_datestamp.as_deref(),
        material_title: options.material_title.as_deref(),
    };

    for (record, entry) in prepared.records.iter().zip(&prepared.plan) {
        let xml = render_assessment_result(record, &ctx, &prepared.item_identifiers)?;
        fs::write(&entry.path, xml).map_err(|source| Error::WriteOutput {
            path: entry.path.clone(),
            source,
        })?;
        debug!("Wrote {:?}", entry.path);
    }

    info!(
        "Wrote {} document(s) to {:?}",
        prepared.plan.len(),
        options.output_dir
    );
    Ok(())
}

/// Full run: prepare, then write unless `options.mode` is a dry run
pub fn run(options: &RunOptions) -> Result<RunReport> {
    let prepared = prepare_run(options)?;

    match options.mode {
        RunMode::DryRun => info!(
            "Dry run: {} document(s) planned, nothing written",
            prepared.plan.len()
        ),
        RunMode::Write => write_outputs(&prepared, options)?,
    }

    Ok(RunReport {
        mode: options.mode,
        output_dir: options.output_dir.clone(),
        outputs: prepared.plan,
    })
}
