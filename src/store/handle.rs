//! Collection-bound store access
//!
//! A list view never sees the whole store. It is handed something that can
//! add, update and delete records of exactly one kind.

use std::marker::PhantomData;

use crate::models::{LineItem, Money};

use super::{BudgetStore, StoredItem};

/// The three operations a list view may invoke on its collection
pub trait ItemActions<T: LineItem> {
    fn add(&mut self, name: String, amount: Money);
    fn update(&mut self, id: T::Id, name: String, amount: Money);
    fn delete(&mut self, id: T::Id);
}

/// A mutable borrow of the store restricted to one collection
pub struct CollectionHandle<'a, T> {
    store: &'a mut BudgetStore,
    _kind: PhantomData<T>,
}

impl<'a, T: StoredItem> CollectionHandle<'a, T> {
    pub fn new(store: &'a mut BudgetStore) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }
}

impl<T: StoredItem> ItemActions<T> for CollectionHandle<'_, T> {
    fn add(&mut self, name: String, amount: Money) {
        self.store.add_item::<T>(name, amount);
    }

    fn update(&mut self, id: T::Id, name: String, amount: Money) {
        self.store.update_item::<T>(id, name, amount);
    }

    fn delete(&mut self, id: T::Id) {
        self.store.delete_item::<T>(id);
    }
}
