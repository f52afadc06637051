//! Boundary with the system of record.
//!
//! The engine only consumes what these traits return; it never writes through
//! them itself.

pub mod json_store;

use uuid::Uuid;

use crate::domain::{Budget, BudgetedCategory, Category, NewTransaction, Transaction};
use crate::engine::BudgetSnapshot;
use crate::errors::Result;

pub use json_store::{JsonStore, StoreData};

/// Supplies the three inputs of a budget snapshot; each fetch may fail on its own.
pub trait SnapshotSource {
    /// The budget with its transactions embedded, in stored order.
    fn fetch_budget(&self, budget_id: Uuid) -> Result<Budget>;
    fn fetch_categories(&self) -> Result<Vec<Category>>;
    fn fetch_allocations(&self, budget_id: Uuid) -> Result<Vec<BudgetedCategory>>;
}

/// Records a new transaction and returns it with its assigned identifier.
pub trait TransactionSink {
    fn add_transaction(&self, budget_id: Uuid, payload: NewTransaction) -> Result<Transaction>;
}

/// Fetches all three inputs; any single failure fails the whole load.
pub fn load_snapshot<S>(source: &S, budget_id: Uuid) -> Result<BudgetSnapshot>
where
    S: SnapshotSource + ?Sized,
{
    let budget = source.fetch_budget(budget_id)?;
    let categories = source.fetch_categories()?;
    let allocations = source.fetch_allocations(budget_id)?;
    Ok(BudgetSnapshot::new(budget, categories, allocations))
}
