use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::*, money::Money};

/// Amount set aside for one category within one budget period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetedCategory {
    pub id: Uuid,
    pub category_id: Uuid,
    pub budget: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<Uuid>,
}

impl BudgetedCategory {
    pub fn new(category_id: Uuid, budget: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            budget,
            budget_id: None,
        }
    }

    /// True when `category_id` is the category this allocation reserves money for.
    pub fn targets(&self, category_id: Uuid) -> bool {
        self.category_id == category_id
    }
}

impl Identifiable for BudgetedCategory {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToCategory for BudgetedCategory {
    fn category_id(&self) -> Option<Uuid> {
        Some(self.category_id)
    }
}

impl Amounted for BudgetedCategory {
    fn amount(&self) -> Money {
        self.budget
    }
}
