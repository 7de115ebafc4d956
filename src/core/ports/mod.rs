//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the host environment (configuration files, CI event payloads).
//!
//! Implementations live in the `adapters` module.

mod checklist_source;
mod event_source;

pub use checklist_source::ChecklistSource;
pub use event_source::EventSource;
