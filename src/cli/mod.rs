//! Command Line Interface (CLI) layer for mangapage.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for page assembly and single-file
//! or batch border cropping. It wires user-provided options to the library
//! functionality exposed via `mangapage::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
