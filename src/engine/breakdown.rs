//! Per-category and per-group figures for the allocation list.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{BudgetedCategory, Money};
use crate::engine::{AllocationGroup, CategoryIndex};

/// One allocation with what has been spent against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLine {
    pub allocation_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub budgeted: Money,
    pub spent: Money,
    /// Budget minus spend; negative when the category is overspent.
    pub remaining: Money,
}

/// Totals for one parent group and its allocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentGroupLine {
    pub name: String,
    pub budgeted: Money,
    pub spent: Money,
    pub remaining: Money,
    pub categories: Vec<CategoryLine>,
}

impl CategoryLine {
    pub fn build(
        allocation: &BudgetedCategory,
        index: &CategoryIndex<'_>,
        expenses: &HashMap<Uuid, Money>,
    ) -> Self {
        let spent = expenses
            .get(&allocation.category_id)
            .copied()
            .unwrap_or_default();
        Self {
            allocation_id: allocation.id,
            category_id: allocation.category_id,
            name: index
                .category_name(allocation.category_id)
                .unwrap_or_default()
                .to_string(),
            budgeted: allocation.budget,
            spent,
            remaining: allocation.budget - spent,
        }
    }
}

impl ParentGroupLine {
    pub fn build(
        group: &AllocationGroup<'_>,
        index: &CategoryIndex<'_>,
        expenses: &HashMap<Uuid, Money>,
    ) -> Self {
        let categories: Vec<CategoryLine> = group
            .allocations
            .iter()
            .map(|allocation| CategoryLine::build(allocation, index, expenses))
            .collect();
        let budgeted: Money = categories.iter().map(|line| line.budgeted).sum();
        let spent: Money = categories.iter().map(|line| line.spent).sum();
        Self {
            name: group.name.clone(),
            budgeted,
            spent,
            remaining: budgeted - spent,
            categories,
        }
    }
}
