//! In-memory budget store
//!
//! Holds the three collections for the lifetime of the session. Every
//! mutation produces a new snapshot; snapshots handed out earlier are never
//! touched, so a renderer can hold one while the store moves on.

pub mod handle;
pub mod totals;

pub use handle::{CollectionHandle, ItemActions};
pub use totals::BudgetTotals;

use std::sync::Arc;

use tracing::{debug, trace};

use crate::models::{Expense, Income, LineItem, Money, SavingsAccount};

/// An immutable view of all three collections at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetSnapshot {
    pub incomes: Vec<Income>,
    pub savings: Vec<SavingsAccount>,
    pub expenses: Vec<Expense>,
}

impl BudgetSnapshot {
    /// Records of one kind, in insertion order
    pub fn items<T: StoredItem>(&self) -> &[T] {
        T::collection(self)
    }

    /// Look up a record by id
    pub fn get<T: StoredItem>(&self, id: T::Id) -> Option<&T> {
        T::collection(self).iter().find(|item| item.id() == id)
    }

    /// Per-collection sums and the remainder
    pub fn totals(&self) -> BudgetTotals {
        BudgetTotals::new(
            sum_amounts(&self.incomes),
            sum_amounts(&self.savings),
            sum_amounts(&self.expenses),
        )
    }
}

fn sum_amounts<T: LineItem>(items: &[T]) -> Money {
    items.iter().map(|item| item.amount()).sum()
}

/// Ties a record kind to its slot in the snapshot
pub trait StoredItem: LineItem {
    fn collection(snapshot: &BudgetSnapshot) -> &Vec<Self>;
    fn collection_mut(snapshot: &mut BudgetSnapshot) -> &mut Vec<Self>;
}

impl StoredItem for Income {
    fn collection(snapshot: &BudgetSnapshot) -> &Vec<Self> {
        &snapshot.incomes
    }

    fn collection_mut(snapshot: &mut BudgetSnapshot) -> &mut Vec<Self> {
        &mut snapshot.incomes
    }
}

impl StoredItem for SavingsAccount {
    fn collection(snapshot: &BudgetSnapshot) -> &Vec<Self> {
        &snapshot.savings
    }

    fn collection_mut(snapshot: &mut BudgetSnapshot) -> &mut Vec<Self> {
        &mut snapshot.savings
    }
}

impl StoredItem for Expense {
    fn collection(snapshot: &BudgetSnapshot) -> &Vec<Self> {
        &snapshot.expenses
    }

    fn collection_mut(snapshot: &mut BudgetSnapshot) -> &mut Vec<Self> {
        &mut snapshot.expenses
    }
}

/// Owner of the current budget snapshot
///
/// The collection an operation targets is chosen by the record type:
/// `store.add_item::<Expense>("Rent", amount)`.
#[derive(Debug, Clone, Default)]
pub struct BudgetStore {
    snapshot: Arc<BudgetSnapshot>,
}

impl BudgetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with a small sample budget
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        store.add_item::<Income>("Salary", Money::from_whole(42_000));
        store.add_item::<Income>("Side job", Money::from_whole(3_500));
        store.add_item::<SavingsAccount>("Home savings (BSU)", Money::from_whole(2_292));
        store.add_item::<SavingsAccount>("Buffer", Money::from_whole(1_500));
        store.add_item::<Expense>("Rent", Money::from_whole(14_500));
        store.add_item::<Expense>("Groceries", Money::from_whole(5_000));
        store.add_item::<Expense>("Transport", Money::from_cents(87_950));
        store
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<BudgetSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Records of one kind in the current snapshot
    pub fn items<T: StoredItem>(&self) -> &[T] {
        self.snapshot.items::<T>()
    }

    /// Append a record with a fresh id to the tail of its collection
    pub fn add_item<T: StoredItem>(&mut self, name: impl Into<String>, amount: Money) -> T::Id {
        let item = T::create(name.into(), amount);
        let id = item.id();
        debug!(collection = T::KIND.title(), %id, amount = %amount, "adding item");
        T::collection_mut(self.next_snapshot()).push(item);
        id
    }

    /// Replace name and amount of the record with `id`
    ///
    /// Returns `false` and leaves the store untouched if no record matches.
    pub fn update_item<T: StoredItem>(
        &mut self,
        id: T::Id,
        name: impl Into<String>,
        amount: Money,
    ) -> bool {
        let Some(index) = self.position::<T>(id) else {
            trace!(collection = T::KIND.title(), %id, "update of unknown item ignored");
            return false;
        };
        debug!(collection = T::KIND.title(), %id, amount = %amount, "updating item");
        T::collection_mut(self.next_snapshot())[index].set_fields(name.into(), amount);
        true
    }

    /// Remove the record with `id`
    ///
    /// Returns `false` and leaves the store untouched if no record matches.
    pub fn delete_item<T: StoredItem>(&mut self, id: T::Id) -> bool {
        let Some(index) = self.position::<T>(id) else {
            trace!(collection = T::KIND.title(), %id, "delete of unknown item ignored");
            return false;
        };
        debug!(collection = T::KIND.title(), %id, "deleting item");
        T::collection_mut(self.next_snapshot()).remove(index);
        true
    }

    /// Sums per collection and the remainder
    pub fn compute_totals(&self) -> BudgetTotals {
        self.snapshot.totals()
    }

    /// Bind a handle to one collection, for handing to a list view
    pub fn handle<T: StoredItem>(&mut self) -> CollectionHandle<'_, T> {
        CollectionHandle::new(self)
    }

    fn position<T: StoredItem>(&self, id: T::Id) -> Option<usize> {
        T::collection(&self.snapshot)
            .iter()
            .position(|item| item.id() == id)
    }

    /// Copy-on-write access; clones only if an older snapshot is still held
    fn next_snapshot(&mut self) -> &mut BudgetSnapshot {
        Arc::make_mut(&mut self.snapshot)
    }
}
