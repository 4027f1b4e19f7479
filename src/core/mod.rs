//! Core run building blocks: option resolution (defaults, output directory,
//! datestamps) and output planning from roster records. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod plan;
