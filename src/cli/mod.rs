//! Command Line Interface (CLI) layer for qtiseed.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): resolving options, running the
//! conversion, and printing the summary. It wires user-provided options to
//! the library functionality exposed via `qtiseed::api`.
//!
//! If you are embedding qtiseed into another application, prefer using
//! the high-level `qtiseed::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
