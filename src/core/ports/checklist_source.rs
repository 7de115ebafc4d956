//! Checklist configuration port
//!
//! Defines where required labels and excluded authors come from.

use crate::error::GateError;

/// Source of the gate's configured lists
///
/// Implementations return trimmed, non-empty lines in configured order.
pub trait ChecklistSource {
    /// Load the required checklist labels
    ///
    /// An unreadable source or an empty list is a fatal error.
    fn required_items(&self) -> Result<Vec<String>, GateError>;

    /// Load the excluded author identities
    ///
    /// Never fails: a missing or unreadable source means nobody is excluded.
    fn excluded_identities(&self) -> Vec<String>;
}
