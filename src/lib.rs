#![doc = r##"
qtiseed — seed QTI 3.0 assessment result documents from a candidate roster.

This crate turns a roster of candidates (CSV) and an assessment test (QTI XML)
into one `assessmentResult` document per candidate. Each document carries the
candidate context, a `testResult`, and one `itemResult` per item reference in
test order. No scoring or outcome variables are written; the documents are
seeds for a later enrichment step. It powers the `qtiseed` CLI and can be
embedded in your own Rust applications.

Quick start: convert a roster
-----------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use qtiseed::{RosterSource, RunOptions, run};

fn main() -> qtiseed::Result<()> {
    let roster = RosterSource::File(PathBuf::from("/data/exam/roster.csv"));
    let mut options = RunOptions::new(roster, PathBuf::from("/data/exam/test.xml"), Path::new("/data"));
    options.test_result_datestamp = Some("2024-04-01T09:00:00Z".to_string());

    let report = run(&options)?;
    for entry in &report.outputs {
        println!("{} -> {}", entry.result_id, entry.path.display());
    }
    Ok(())
}
```

Render a single document in memory
----------------------------------
```rust
use qtiseed::{RenderContext, RosterRecord, render_assessment_result};

fn main() -> qtiseed::Result<()> {
    let record = RosterRecord {
        candidate_number: "1001".to_string(),
        candidate_name: "山田太郎".to_string(),
        candidate_account: None,
        candidate_id: None,
        result_id: "1001".to_string(),
    };
    let ctx = RenderContext {
        test_result_id: "assessment-test",
        datestamp: None,
        material_title: None,
    };
    let xml = render_assessment_result(&record, &ctx, &["item-001".to_string()])?;
    assert!(xml.contains(r#"sequenceIndex="1""#));
    Ok(())
}
```

Error handling
--------------
All high-level functions return `qtiseed::Result<T>`; match on `qtiseed::Error`
to handle specific cases, e.g. roster validation or existing output files.

```rust,no_run
use std::path::{Path, PathBuf};
use qtiseed::{Error, RosterSource, RunOptions, run};

fn main() {
    let options = RunOptions::new(
        RosterSource::Stdin,
        PathBuf::from("test.xml"),
        Path::new("."),
    );
    match run(&options) {
        Ok(report) => println!("{} document(s)", report.outputs.len()),
        Err(Error::Roster(e)) => eprintln!("roster: {e}"),
        Err(Error::OutputExists { path }) => eprintln!("exists: {}", path.display()),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points (`prepare_run`, `write_outputs`, `run`).
- [`core`] — run options and output planning.
- [`io`] — roster reader, item extractor, and document writer.
- [`types`] — shared enums (`RunMode`, `SessionIdentifierSource`, `SessionStatus`).
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::RunOptions;
pub use crate::core::plan::OutputPlanEntry;
pub use crate::error::{Error, Result};
pub use crate::types::{RunMode, SessionIdentifierSource, SessionStatus};

// Readers
pub use crate::io::assessment_test::{AssessmentTestError, extract_item_identifiers, read_item_identifiers};
pub use crate::io::roster::{RosterError, RosterRecord, RosterSource, parse_roster, read_roster};

// Writers
pub use crate::io::writers::assessment_result::{RenderContext, render_assessment_result};

// High-level API re-exports
pub use crate::api::{PreparedRun, RunReport, ensure_output_dir, prepare_run, run, write_outputs};
