use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::{Budget, BudgetedCategory, Category, Transaction};
use crate::engine::{CategoryIndex, Selection, SpendCalculator, SpendSummary, TransactionFilter};

/// The three inputs of one computation pass, fetched together and never patched.
///
/// After a transaction is written the caller fetches a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub budget: Budget,
    pub categories: Vec<Category>,
    pub allocations: Vec<BudgetedCategory>,
}

impl BudgetSnapshot {
    pub fn new(
        budget: Budget,
        categories: Vec<Category>,
        allocations: Vec<BudgetedCategory>,
    ) -> Self {
        Self {
            budget,
            categories,
            allocations,
        }
    }

    pub fn index(&self, config: &EngineConfig) -> CategoryIndex<'_> {
        CategoryIndex::with_grouping(&self.categories, config.top_level_grouping)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.budget.transactions
    }

    pub fn spend_summary(&self) -> SpendSummary {
        SpendCalculator::summarize(
            self.budget.total_amount,
            &self.allocations,
            self.transactions(),
        )
    }

    pub fn filtered_transactions(
        &self,
        selection: &Selection,
        config: &EngineConfig,
    ) -> Vec<&Transaction> {
        let index = self.index(config);
        TransactionFilter::apply(selection, self.transactions(), &self.allocations, &index)
    }
}
