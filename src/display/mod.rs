//! Display formatting for terminal output
//!
//! Locale-aware amount rendering, shared by the TUI and the plain-text
//! summary printed on exit.

pub mod amount;
pub mod summary;

pub use amount::{AmountFormat, Locale};
pub use summary::format_summary;
