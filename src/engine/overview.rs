//! Everything a budget page shows, computed in one pass from a snapshot.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::domain::Transaction;
use crate::engine::{
    BudgetSnapshot, BudgetedCategoryGrouper, ParentGroupLine, Selection, SpendCalculator,
    SpendSummary, TransactionGrouper,
};
use crate::errors::Result;

/// Header figures, allocation groups and the unbudgeted bucket for one budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetOverview {
    pub budget_id: Uuid,
    pub budget_name: String,
    pub summary: SpendSummary,
    pub groups: Vec<ParentGroupLine>,
    pub unbudgeted_label: String,
}

impl BudgetOverview {
    /// Fails only when an allocation cannot be placed in a group.
    pub fn compute(snapshot: &BudgetSnapshot, config: &EngineConfig) -> Result<Self> {
        let index = snapshot.index(config);
        let grouped = BudgetedCategoryGrouper::group(&snapshot.allocations, &index)?;
        let expenses = SpendCalculator::expenses_by_category(snapshot.transactions());
        let groups = grouped
            .iter()
            .map(|group| ParentGroupLine::build(group, &index, &expenses))
            .collect();

        Ok(Self {
            budget_id: snapshot.budget.id,
            budget_name: snapshot.budget.name.clone(),
            summary: snapshot.spend_summary(),
            groups,
            unbudgeted_label: config.unbudgeted_label.clone(),
        })
    }

    pub fn group(&self, name: &str) -> Option<&ParentGroupLine> {
        self.groups.iter().find(|group| group.name == name)
    }
}

/// A transaction paired with the name of its category, when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow<'a> {
    pub transaction: &'a Transaction,
    pub category_name: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView<'a> {
    pub day: u32,
    pub rows: Vec<TransactionRow<'a>>,
}

pub struct TransactionView;

impl TransactionView {
    /// Filters the snapshot's transactions by `selection`, then groups them by day.
    pub fn compute<'a>(
        snapshot: &'a BudgetSnapshot,
        selection: &Selection,
        config: &EngineConfig,
    ) -> Vec<DayView<'a>> {
        let index = snapshot.index(config);
        let filtered = snapshot.filtered_transactions(selection, config);
        debug!(
            ?selection,
            matched = filtered.len(),
            total = snapshot.transactions().len(),
            "filtered transactions"
        );
        TransactionGrouper::by_day(filtered)
            .into_iter()
            .map(|group| DayView {
                day: group.day,
                rows: group
                    .transactions
                    .into_iter()
                    .map(|transaction| TransactionRow {
                        transaction,
                        category_name: transaction
                            .category_id
                            .and_then(|id| index.category_name(id)),
                    })
                    .collect(),
            })
            .collect()
    }
}
