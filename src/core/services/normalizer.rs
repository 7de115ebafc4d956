//! Status normalizer
//!
//! Total mapping from a raw bracket token to a [`NormalizedStatus`].
//! Anything not listed below is [`NormalizedStatus::Invalid`].
//!
//! | token            | checkbox    | glyph            | extended         |
//! |------------------|-------------|------------------|------------------|
//! | whitespace only  | unsatisfied | unsatisfied      | unsatisfied      |
//! | `x`, `X`         | satisfied   | invalid          | satisfied        |
//! | `✔`              | invalid     | satisfied        | satisfied        |
//! | `✖`              | invalid     | per declined     | per declined     |
//! | `NA` (any case)  | invalid     | not_applicable   | not_applicable   |

use crate::core::models::{DeclinedPolicy, NormalizedStatus, StatusPolicy};

const CHECK_GLYPH: &str = "\u{2714}";
const DECLINE_GLYPH: &str = "\u{2716}";
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Normalize a raw status token under the given policy
#[must_use]
pub fn normalize(token: &str, policy: StatusPolicy) -> NormalizedStatus {
    if token.is_empty() {
        return NormalizedStatus::Invalid;
    }

    let trimmed = token.trim();
    if trimmed.is_empty() {
        return NormalizedStatus::Unsatisfied;
    }

    let symbol = trimmed.trim_end_matches(VARIATION_SELECTOR);
    let vocabulary = policy.vocabulary;

    match symbol {
        "x" | "X" if vocabulary.accepts_checkbox() => NormalizedStatus::Satisfied,
        CHECK_GLYPH if vocabulary.accepts_glyphs() => NormalizedStatus::Satisfied,
        DECLINE_GLYPH if vocabulary.accepts_glyphs() => match policy.declined {
            DeclinedPolicy::Pass => NormalizedStatus::Satisfied,
            DeclinedPolicy::Fail => NormalizedStatus::Unsatisfied,
        },
        s if vocabulary.accepts_glyphs() && s.eq_ignore_ascii_case("na") => {
            NormalizedStatus::NotApplicable
        },
        _ => NormalizedStatus::Invalid,
    }
}
