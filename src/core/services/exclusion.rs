//! Excluded author check

/// Whether the author is on the exclusion list
///
/// Exact, case-sensitive membership. An empty author never matches.
#[must_use]
pub fn is_excluded(author: &str, excluded: &[String]) -> bool {
    !author.is_empty() && excluded.iter().any(|identity| identity == author)
}
