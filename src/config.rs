//! Gate settings file
//!
//! Optional `.checklist-gate.toml` in the working directory. Command-line
//! flags and their environment variables take precedence over it.
//!
//! ```toml
//! [status]
//! vocabulary = "extended"   # checkbox | glyph | extended
//! declined = "fail"         # fail | pass
//!
//! [sources]
//! items_file = "config/checklist-items.txt"
//! exclusions_file = "config/excluded-authors.txt"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::StatusPolicy;
use crate::error::GateError;

/// Default settings file name
pub const CONFIG_FILE: &str = ".checklist-gate.toml";

/// Default required items list
pub const DEFAULT_ITEMS_FILE: &str = "config/checklist-items.txt";

/// Default excluded authors list
pub const DEFAULT_EXCLUSIONS_FILE: &str = "config/excluded-authors.txt";

/// Gate settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Status vocabulary settings
    #[serde(default)]
    pub status: StatusPolicy,
    /// List file locations
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Locations of the list files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Required checklist labels, one per line
    #[serde(default = "default_items_file")]
    pub items_file: PathBuf,
    /// Excluded author logins, one per line
    #[serde(default = "default_exclusions_file")]
    pub exclusions_file: PathBuf,
}

fn default_items_file() -> PathBuf {
    PathBuf::from(DEFAULT_ITEMS_FILE)
}

fn default_exclusions_file() -> PathBuf {
    PathBuf::from(DEFAULT_EXCLUSIONS_FILE)
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            items_file: default_items_file(),
            exclusions_file: default_exclusions_file(),
        }
    }
}

impl GateConfig {
    /// Load settings
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `.checklist-gate.toml` is read if present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, GateError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_file(path)
                } else {
                    log::debug!("No {CONFIG_FILE}; using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse a settings file
    pub fn load_file(path: &Path) -> Result<Self, GateError> {
        let content = fs::read_to_string(path).map_err(|source| GateError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| GateError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render settings as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
