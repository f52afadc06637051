//! Partitions allocations by the name of their parent group.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::BudgetedCategory;
use crate::engine::CategoryIndex;
use crate::errors::{EngineError, Result};

/// Allocations that share one parent group, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationGroup<'a> {
    pub name: String,
    pub allocations: Vec<&'a BudgetedCategory>,
}

pub struct BudgetedCategoryGrouper;

impl BudgetedCategoryGrouper {
    /// Groups `allocations` by resolved parent name.
    ///
    /// Groups appear in the order their name is first seen. An allocation whose
    /// category is unknown, or has no group under the configured convention,
    /// fails the whole grouping instead of silently shrinking the totals.
    pub fn group<'a>(
        allocations: &'a [BudgetedCategory],
        index: &CategoryIndex<'_>,
    ) -> Result<Vec<AllocationGroup<'a>>> {
        let mut groups: Vec<AllocationGroup<'a>> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for allocation in allocations {
            let name = Self::group_name(allocation, index)?;
            match positions.get(name) {
                Some(&position) => groups[position].allocations.push(allocation),
                None => {
                    positions.insert(name.to_string(), groups.len());
                    groups.push(AllocationGroup {
                        name: name.to_string(),
                        allocations: vec![allocation],
                    });
                }
            }
        }

        debug!(
            allocations = allocations.len(),
            groups = groups.len(),
            "grouped allocations by parent"
        );
        Ok(groups)
    }

    fn group_name<'i>(
        allocation: &BudgetedCategory,
        index: &CategoryIndex<'i>,
    ) -> Result<&'i str> {
        if index.lookup(allocation.category_id).is_none() {
            warn!(
                allocation = %allocation.id,
                category = %allocation.category_id,
                "allocation references a category that does not exist"
            );
            return Err(EngineError::DanglingAllocation {
                allocation_id: allocation.id,
                category_id: allocation.category_id,
            });
        }
        index.parent_name(allocation.category_id).ok_or_else(|| {
            warn!(
                allocation = %allocation.id,
                category = %allocation.category_id,
                "allocation targets a top-level category"
            );
            EngineError::UngroupedAllocation {
                allocation_id: allocation.id,
                category_id: allocation.category_id,
            }
        })
    }
}
