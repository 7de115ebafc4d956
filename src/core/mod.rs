//! Core domain logic for checklist-gate
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ChecklistEntry, NormalizedStatus, EvaluationOutcome)
//! - `services/` - Parsing, normalization, evaluation and gate orchestration
//! - `ports/` - Trait definitions for configuration and event sources

pub mod models;
pub mod ports;
pub mod services;
