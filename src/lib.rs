//! Leftover - a terminal budgeting widget
//!
//! Enter recurring income, savings and expense line items and see what is
//! left over: income minus savings minus expenses. Everything lives in
//! memory for the length of the session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and logging setup
//! - `error`: Custom error types
//! - `models`: Line items and the money type
//! - `store`: In-memory budget store and derived totals
//! - `display`: Locale-aware formatting
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use leftover::models::{Expense, Income, Money, SavingsAccount};
//! use leftover::store::BudgetStore;
//!
//! let mut store = BudgetStore::new();
//! store.add_item::<Income>("Salary", Money::from_whole(5000));
//! store.add_item::<SavingsAccount>("BSU", Money::from_whole(1000));
//! store.add_item::<Expense>("Rent", Money::from_whole(2000));
//!
//! assert_eq!(store.compute_totals().remainder, Money::from_whole(2000));
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod store;
pub mod tui;

pub use error::{LeftoverError, LeftoverResult};
