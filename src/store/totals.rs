//! Derived budget totals

use serde::Serialize;

use crate::models::Money;

/// Per-collection sums and what is left over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BudgetTotals {
    pub income: Money,
    pub savings: Money,
    pub expenses: Money,
    /// income - savings - expenses
    pub remainder: Money,
}

impl BudgetTotals {
    pub fn new(income: Money, savings: Money, expenses: Money) -> Self {
        Self {
            income,
            savings,
            expenses,
            remainder: income - savings - expenses,
        }
    }

    /// More is allocated than comes in
    pub fn is_overspent(&self) -> bool {
        self.remainder.is_negative()
    }
}
