//! Business logic services
//!
//! Pure logic that operates on domain models. Only [`gate`] touches the
//! outside world, and only through port traits.
//!
//! - [`parser`] - Turn description lines into checklist entries
//! - [`normalizer`] - Map bracket tokens to statuses
//! - [`evaluator`] - Sort required labels into result buckets
//! - [`exclusion`] - Excluded author check
//! - [`gate`] - Full run: event, exclusion, evaluation

pub mod evaluator;
pub mod exclusion;
pub mod gate;
pub mod normalizer;
pub mod parser;

pub use evaluator::evaluate;
pub use exclusion::is_excluded;
pub use gate::run_gate;
pub use normalizer::normalize;
pub use parser::{parse_entries, parse_line, split_lines};
