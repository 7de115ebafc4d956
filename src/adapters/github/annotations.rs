//! GitHub workflow command annotations
//!
//! Lines such as `::error title=Checklist gate::Missing item` are picked up
//! by the Actions runner and shown inline on the pull request.

const TITLE: &str = "Checklist gate";

/// Escape annotation message data
#[must_use]
pub fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escape an annotation property value
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format an `::error` workflow command
#[must_use]
pub fn error_annotation(message: &str) -> String {
    format!("::error title={}::{}", escape_property(TITLE), escape_data(message))
}
