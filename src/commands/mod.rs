//! Command implementations

mod check;
mod init;
mod inspect;
mod settings;

pub use check::check;
pub use init::init;
pub use inspect::inspect;
