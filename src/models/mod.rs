//! Core data models for Leftover
//!
//! The budgeting domain is three flat lists of line items plus the money
//! type they are measured in.

pub mod ids;
pub mod money;
pub mod record;

pub use ids::{ExpenseId, IncomeId, SavingsId};
pub use money::{Money, MoneyParseError, MAX_PARSED_CENTS};
pub use record::{CollectionKind, Expense, Income, LineItem, SavingsAccount};
