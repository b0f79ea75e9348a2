//! Terminal User Interface module
//!
//! This module provides the interactive budget screen using ratatui: an
//! overview of totals and one editable list per collection.

pub mod app;
pub mod event;
pub mod handler;
pub mod item_list;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use item_list::ItemListView;
pub use terminal::run_tui;
