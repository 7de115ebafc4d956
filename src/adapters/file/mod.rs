//! Newline-delimited list loading
//!
//! Implements `ChecklistSource` using plain text lists: one entry per
//! line, blank lines ignored, no quoting or escaping. Each list can be
//! given inline (as GitHub Actions inputs are) or as a file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ports::ChecklistSource;
use crate::error::GateError;

/// Split list text into trimmed, non-empty lines
#[must_use]
pub fn parse_line_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Where a list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLocation {
    /// Literal newline-delimited text
    Inline(String),
    /// A text file
    File(PathBuf),
}

impl ListLocation {
    /// Prefer inline text when it holds at least one entry, else the file
    #[must_use]
    pub fn resolve(inline: Option<&str>, file: &Path) -> Self {
        match inline {
            Some(text) if !parse_line_list(text).is_empty() => Self::Inline(text.to_string()),
            _ => Self::File(file.to_path_buf()),
        }
    }
}

/// Checklist source backed by inline text or list files
#[derive(Debug, Clone)]
pub struct FileChecklistSource {
    items: ListLocation,
    exclusions: ListLocation,
}

impl FileChecklistSource {
    /// Create a source from the two list locations
    #[must_use]
    pub const fn new(items: ListLocation, exclusions: ListLocation) -> Self {
        Self { items, exclusions }
    }
}

impl ChecklistSource for FileChecklistSource {
    fn required_items(&self) -> Result<Vec<String>, GateError> {
        let items = match &self.items {
            ListLocation::Inline(text) => parse_line_list(text),
            ListLocation::File(path) => {
                let raw = fs::read_to_string(path).map_err(|source| GateError::ItemsRead {
                    path: path.clone(),
                    source,
                })?;
                parse_line_list(&raw)
            },
        };

        if items.is_empty() {
            return Err(GateError::NoRequiredItems);
        }
        log::debug!("Loaded {} required item(s)", items.len());
        Ok(items)
    }

    fn excluded_identities(&self) -> Vec<String> {
        match &self.exclusions {
            ListLocation::Inline(text) => parse_line_list(text),
            ListLocation::File(path) => match fs::read_to_string(path) {
                Ok(raw) => {
                    let ids = parse_line_list(&raw);
                    log::debug!("Loaded {} excluded identity(ies) from {}", ids.len(), path.display());
                    ids
                },
                Err(e) => {
                    log::debug!("No exclusions from {}: {e}", path.display());
                    Vec::new()
                },
            },
        }
    }
}
