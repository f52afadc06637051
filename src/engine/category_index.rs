//! Identifier lookup over the full category set.

use std::collections::HashMap;

use uuid::Uuid;

use crate::config::TopLevelGrouping;
use crate::domain::Category;

/// Read-only index of categories by identifier.
///
/// Every lookup returns `Option`; a missing category is a data hole for the
/// caller to skip, never a failure.
#[derive(Debug, Clone)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<Uuid, &'a Category>,
    top_level: TopLevelGrouping,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        Self::with_grouping(categories, TopLevelGrouping::default())
    }

    pub fn with_grouping(categories: &'a [Category], top_level: TopLevelGrouping) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        for category in categories {
            // first record wins when the source repeats an identifier
            by_id.entry(category.id).or_insert(category);
        }
        Self { by_id, top_level }
    }

    pub fn lookup(&self, category_id: Uuid) -> Option<&'a Category> {
        self.by_id.get(&category_id).copied()
    }

    pub fn category_name(&self, category_id: Uuid) -> Option<&'a str> {
        self.lookup(category_id).map(|category| category.name.as_str())
    }

    /// Name of the group `category_id` belongs to.
    ///
    /// For a top-level category the result depends on the configured
    /// [`TopLevelGrouping`].
    pub fn parent_name(&self, category_id: Uuid) -> Option<&'a str> {
        let category = self.lookup(category_id)?;
        match (&category.parent_category, self.top_level) {
            (Some(parent), _) => Some(parent.name.as_str()),
            (None, TopLevelGrouping::OwnName) => Some(category.name.as_str()),
            (None, TopLevelGrouping::Exclude) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
