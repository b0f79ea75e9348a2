//! Budget line items
//!
//! Three record kinds share one shape: an id, a display name and an amount.
//! Expenses call their name `category_name`; everything else about them is
//! identical to incomes and savings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use super::ids::{ExpenseId, IncomeId, SavingsId};
use super::money::Money;

/// Which of the three collections a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Income,
    Savings,
    Expense,
}

impl CollectionKind {
    /// All kinds, in the order they are shown on screen
    pub const ALL: [CollectionKind; 3] = [Self::Income, Self::Savings, Self::Expense];

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Savings => "Savings",
            Self::Expense => "Expenses",
        }
    }

    /// What the name field means for this collection
    pub fn name_label(&self) -> &'static str {
        match self {
            Self::Income => "Name (e.g. Salary)",
            Self::Savings => "Account (e.g. Home savings)",
            Self::Expense => "Category (e.g. Rent)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Income => Self::Savings,
            Self::Savings => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Savings => Self::Income,
            Self::Expense => Self::Savings,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Common interface over the three record kinds
pub trait LineItem: Clone + fmt::Debug {
    /// Typed id for this record kind
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// The collection this record kind lives in
    const KIND: CollectionKind;

    /// Create a record with a freshly generated id
    fn create(name: String, amount: Money) -> Self;

    fn id(&self) -> Self::Id;

    /// Display name (the category name for expenses)
    fn name(&self) -> &str;

    fn amount(&self) -> Money;

    /// Replace name and amount, keeping the id
    fn set_fields(&mut self, name: String, amount: Money);
}

/// A recurring source of income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub name: String,
    pub amount: Money,
}

/// Money set aside into a savings account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsAccount {
    pub id: SavingsId,
    pub name: String,
    pub amount: Money,
}

/// A recurring expense, keyed by spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category_name: String,
    pub amount: Money,
}

impl LineItem for Income {
    type Id = IncomeId;
    const KIND: CollectionKind = CollectionKind::Income;

    fn create(name: String, amount: Money) -> Self {
        Self {
            id: IncomeId::new(),
            name,
            amount,
        }
    }

    fn id(&self) -> IncomeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn set_fields(&mut self, name: String, amount: Money) {
        self.name = name;
        self.amount = amount;
    }
}

impl LineItem for SavingsAccount {
    type Id = SavingsId;
    const KIND: CollectionKind = CollectionKind::Savings;

    fn create(name: String, amount: Money) -> Self {
        Self {
            id: SavingsId::new(),
            name,
            amount,
        }
    }

    fn id(&self) -> SavingsId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn set_fields(&mut self, name: String, amount: Money) {
        self.name = name;
        self.amount = amount;
    }
}

impl LineItem for Expense {
    type Id = ExpenseId;
    const KIND: CollectionKind = CollectionKind::Expense;

    fn create(category_name: String, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            category_name,
            amount,
        }
    }

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn name(&self) -> &str {
        &self.category_name
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn set_fields(&mut self, category_name: String, amount: Money) {
        self.category_name = category_name;
        self.amount = amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_generates_distinct_ids() {
        let a = Income::create("Salary".into(), Money::from_whole(5000));
        let b = Income::create("Salary".into(), Money::from_whole(5000));
        assert_ne!(a.id, b.id);
        assert_eq!(a.name(), "Salary");
    }

    #[test]
    fn test_expense_name_is_category() {
        let mut e = Expense::create("Rent".into(), Money::from_whole(1500));
        assert_eq!(e.name(), "Rent");
        assert_eq!(e.category_name, "Rent");

        let id = e.id();
        e.set_fields("Housing".into(), Money::from_whole(1600));
        assert_eq!(e.category_name, "Housing");
        assert_eq!(e.amount(), Money::from_whole(1600));
        assert_eq!(e.id(), id);
    }

    #[test]
    fn test_kind_cycle() {
        for kind in CollectionKind::ALL {
            assert_eq!(kind.next().prev(), kind);
        }
        assert_eq!(CollectionKind::Expense.next(), CollectionKind::Income);
        assert_eq!(SavingsAccount::KIND, CollectionKind::Savings);
    }

    #[test]
    fn test_expense_serialization_uses_category_name() {
        let e = Expense::create("Food".into(), Money::from_cents(-250));
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["category_name"], "Food");
        assert_eq!(json["amount"], -250);
    }
}
