//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Newline-delimited required item and exclusion lists
//! - `github/` - GitHub event payloads and workflow annotations

pub mod file;
pub mod github;
