use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::*, money::Money, transaction::Transaction};

/// One period's total allowance together with its transaction history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,
    pub name: String,
    pub total_amount: Money,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Budget {
    pub fn new(name: impl Into<String>, total_amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total_amount,
            transactions: Vec::new(),
        }
    }

    /// Replaces the embedded transaction list, used when assembling a snapshot.
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Budget {
    fn name(&self) -> &str {
        &self.name
    }
}
