use tracing::debug;

use crate::domain::{BudgetedCategory, Transaction};
use crate::engine::{CategoryIndex, Selection, SpendCalculator};

pub struct TransactionFilter;

impl TransactionFilter {
    /// Transactions matching `selection`, in input order.
    ///
    /// A transaction whose category cannot be resolved never matches a parent
    /// group; stale references are skipped rather than reported.
    pub fn apply<'t>(
        selection: &Selection,
        transactions: &'t [Transaction],
        allocations: &[BudgetedCategory],
        index: &CategoryIndex<'_>,
    ) -> Vec<&'t Transaction> {
        match selection {
            Selection::All => transactions.iter().collect(),
            Selection::Unbudgeted => {
                SpendCalculator::unbudgeted_transactions(allocations, transactions)
            }
            Selection::Parent(name) => transactions
                .iter()
                .filter(|txn| Self::in_parent(txn, name, index))
                .collect(),
        }
    }

    fn in_parent(transaction: &Transaction, name: &str, index: &CategoryIndex<'_>) -> bool {
        match transaction.category_id.and_then(|id| index.parent_name(id)) {
            Some(parent) => parent == name,
            None => {
                debug!(
                    transaction = %transaction.id,
                    "transaction has no resolvable parent group"
                );
                false
            }
        }
    }
}
