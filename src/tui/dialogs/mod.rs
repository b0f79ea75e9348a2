//! Dialog overlays for the TUI

pub mod help;
