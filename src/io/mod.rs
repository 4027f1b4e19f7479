//! I/O layer for reading the candidate roster and the assessment test.
//! Provides the `roster` CSV reader, the `assessment_test` item extractor,
//! and `writers` for the seeded result documents.
pub mod roster;
pub use roster::{RosterError, RosterRecord, RosterSource};

pub use assessment_test::AssessmentTestError;

pub mod writers;
