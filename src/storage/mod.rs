//! Whole-record persistence for the expense list and the active budget.
//!
//! Every call reads or writes a complete record. Failures never escape this
//! boundary: reads fall back to empty/absent, writes are dropped, and both
//! are logged.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::db::{Database, KeyValueStore, StoreError};
use crate::models::{Budget, Expense};

pub(crate) const EXPENSES_KEY: &str = "bunnybudget_expenses";
pub(crate) const BUDGET_KEY: &str = "bunnybudget_budget";

/// Storage backed by the on-disk SQLite file.
pub(crate) type LocalStorage = Storage<Database>;

pub(crate) struct Storage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn get_expenses(&self) -> Vec<Expense> {
        match self.read(EXPENSES_KEY) {
            Ok(expenses) => expenses.unwrap_or_default(),
            Err(e) => {
                error!(key = EXPENSES_KEY, error = %e, "Error loading expenses");
                Vec::new()
            }
        }
    }

    pub(crate) fn save_expenses(&mut self, expenses: &[Expense]) {
        if let Err(e) = self.write(EXPENSES_KEY, expenses) {
            error!(key = EXPENSES_KEY, error = %e, "Error saving expenses");
        }
    }

    /// Prepend `expense` so the stored list stays newest-first.
    pub(crate) fn add_expense(&mut self, expense: Expense) -> Vec<Expense> {
        let mut expenses = self.get_expenses();
        debug!(id = %expense.id, amount = %expense.amount, "adding expense");
        expenses.insert(0, expense);
        self.save_expenses(&expenses);
        expenses
    }

    pub(crate) fn delete_expense(&mut self, id: &str) -> Vec<Expense> {
        let mut expenses = self.get_expenses();
        expenses.retain(|e| e.id != id);
        debug!(id, remaining = expenses.len(), "deleted expense");
        self.save_expenses(&expenses);
        expenses
    }

    // ── Budget ────────────────────────────────────────────────

    pub(crate) fn get_budget(&self) -> Option<Budget> {
        match self.read(BUDGET_KEY) {
            Ok(budget) => budget,
            Err(e) => {
                error!(key = BUDGET_KEY, error = %e, "Error loading budget");
                None
            }
        }
    }

    /// Replaces whatever budget was stored, regardless of its month.
    pub(crate) fn save_budget(&mut self, budget: &Budget) {
        if let Err(e) = self.write(BUDGET_KEY, budget) {
            error!(key = BUDGET_KEY, error = %e, "Error saving budget");
        }
    }

    pub(crate) fn clear_all_data(&mut self) {
        for key in [EXPENSES_KEY, BUDGET_KEY] {
            if let Err(e) = self.store.remove_item(key) {
                error!(key, error = %e, "Error clearing data");
            }
        }
    }

    // ── Raw access ────────────────────────────────────────────

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get_item(key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set_item(key, &raw)
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests;
