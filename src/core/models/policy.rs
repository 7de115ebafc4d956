//! Status vocabulary settings
//!
//! Which bracket tokens are recognized, and what the decline glyph means.

use serde::{Deserialize, Serialize};

/// Which set of bracket tokens is recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVocabulary {
    /// Markdown checkboxes only: `[ ]`, `[x]`, `[X]`
    Checkbox,
    /// Glyphs only: `[ ]`, `[✔]`, `[✖]`, `[NA]`
    Glyph,
    /// Both checkboxes and glyphs
    #[default]
    Extended,
}

impl StatusVocabulary {
    /// Whether `x`/`X` count as a completed checkbox
    #[must_use]
    pub const fn accepts_checkbox(self) -> bool {
        matches!(self, Self::Checkbox | Self::Extended)
    }

    /// Whether `✔`, `✖` and `NA` are recognized
    #[must_use]
    pub const fn accepts_glyphs(self) -> bool {
        matches!(self, Self::Glyph | Self::Extended)
    }
}

impl std::fmt::Display for StatusVocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checkbox => write!(f, "checkbox"),
            Self::Glyph => write!(f, "glyph"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for StatusVocabulary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checkbox" => Ok(Self::Checkbox),
            "glyph" => Ok(Self::Glyph),
            "extended" => Ok(Self::Extended),
            _ => Err(format!("Invalid vocabulary: {s}. Use: checkbox, glyph, extended")),
        }
    }
}

/// What the decline glyph `✖` means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclinedPolicy {
    /// `✖` is an explicitly declined item and does not satisfy the requirement
    #[default]
    Fail,
    /// `✖` is a reviewed-and-declined item and satisfies the requirement
    Pass,
}

impl std::fmt::Display for DeclinedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Pass => write!(f, "pass"),
        }
    }
}

impl std::str::FromStr for DeclinedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "pass" => Ok(Self::Pass),
            _ => Err(format!("Invalid declined policy: {s}. Use: fail, pass")),
        }
    }
}

/// Complete status normalization settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusPolicy {
    /// Recognized tokens
    #[serde(default)]
    pub vocabulary: StatusVocabulary,
    /// Meaning of `✖`
    #[serde(default)]
    pub declined: DeclinedPolicy,
}

impl StatusPolicy {
    /// Create a policy from its parts
    #[must_use]
    pub const fn new(vocabulary: StatusVocabulary, declined: DeclinedPolicy) -> Self {
        Self {
            vocabulary,
            declined,
        }
    }
}
