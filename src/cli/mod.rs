//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) wiring the legacy command-line
//! grammar to the library functionality exposed via `eseries::api`.
//!
//! If you are embedding the matcher into another application, prefer the
//! high-level `eseries::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
