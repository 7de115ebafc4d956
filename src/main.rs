//! checklist-gate - Required checklist items for pull requests
//!
//! Exit status: `0` when the gate passes, `1` when required items are
//! missing or unsatisfied, `2` when the inputs themselves are unusable.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

use std::process::ExitCode;

/// Exit status for a failing gate
const GATE_FAILED: u8 = 1;
/// Exit status for unusable inputs
const FATAL_INPUT: u8 = 2;

/// Main entry point for the checklist-gate CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(GATE_FAILED),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(FATAL_INPUT)
        },
    }
}
