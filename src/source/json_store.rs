//! File-backed system of record.
//!
//! The file mirrors a REST document store: top-level `budgets`, `transactions`,
//! `categories` and `budgetCategories` collections, with transactions and
//! allocations scoped to a budget through `budgetId`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::domain::{Budget, BudgetedCategory, Category, NewTransaction, Transaction};
use crate::errors::{EngineError, Result};
use crate::source::{SnapshotSource, TransactionSink};
use crate::utils::persistence::{load_json_from_file, save_json_to_file};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budget_categories: Vec<BudgetedCategory>,
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes `data` to `path` and returns a store over it.
    pub fn create(path: impl Into<PathBuf>, data: &StoreData) -> Result<Self> {
        let store = Self::open(path);
        store.write(data)?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<StoreData> {
        load_json_from_file(&self.path)
    }

    fn write(&self, data: &StoreData) -> Result<()> {
        save_json_to_file(data, &self.path)
    }
}

impl SnapshotSource for JsonStore {
    fn fetch_budget(&self, budget_id: Uuid) -> Result<Budget> {
        let data = self.read()?;
        let budget = data
            .budgets
            .into_iter()
            .find(|budget| budget.id == budget_id)
            .ok_or(EngineError::BudgetNotFound(budget_id))?;
        let transactions = data
            .transactions
            .into_iter()
            .filter(|txn| txn.budget_id == Some(budget_id))
            .collect();
        Ok(budget.with_transactions(transactions))
    }

    fn fetch_categories(&self) -> Result<Vec<Category>> {
        Ok(self.read()?.categories)
    }

    fn fetch_allocations(&self, budget_id: Uuid) -> Result<Vec<BudgetedCategory>> {
        Ok(self
            .read()?
            .budget_categories
            .into_iter()
            .filter(|allocation| allocation.budget_id == Some(budget_id))
            .collect())
    }
}

impl TransactionSink for JsonStore {
    fn add_transaction(&self, budget_id: Uuid, payload: NewTransaction) -> Result<Transaction> {
        if payload.amount.is_negative() {
            return Err(EngineError::Validation(format!(
                "transaction amount must not be negative, got {}",
                payload.amount
            )));
        }
        let mut data = self.read()?;
        if !data.budgets.iter().any(|budget| budget.id == budget_id) {
            return Err(EngineError::BudgetNotFound(budget_id));
        }
        let transaction = payload.into_transaction(Uuid::new_v4(), budget_id);
        data.transactions.push(transaction.clone());
        self.write(&data)?;
        info!(
            budget = %budget_id,
            transaction = %transaction.id,
            amount = %transaction.amount,
            "recorded transaction"
        );
        Ok(transaction)
    }
}
