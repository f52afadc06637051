//! Domain types representing spending categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Reference to the grouping category a child category belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParentRef {
    pub id: Uuid,
    pub name: String,
}

/// A labelled bucket transactions can belong to.
///
/// Only one level of nesting exists: a category is either a parent itself or
/// points at exactly one parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<ParentRef>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_category: None,
        }
    }

    /// Creates a child category nested under `parent`.
    pub fn child_of(name: impl Into<String>, parent: &Category) -> Self {
        Self {
            parent_category: Some(ParentRef {
                id: parent.id,
                name: parent.name.clone(),
            }),
            ..Self::new(name)
        }
    }

    pub fn is_parent(&self) -> bool {
        self.parent_category.is_none()
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent_category.as_ref().map(|parent| parent.name.as_str())
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_points_at_parent_name() {
        let food = Category::new("Food");
        let groceries = Category::child_of("Groceries", &food);

        assert!(food.is_parent());
        assert!(!groceries.is_parent());
        assert_eq!(groceries.parent_name(), Some("Food"));
        assert_eq!(groceries.parent_category.as_ref().unwrap().id, food.id);
    }

    #[test]
    fn deserializes_nested_parent_reference() {
        let parent_id = Uuid::new_v4();
        let json = format!(
            r#"{{"id":"{}","name":"Rent","parentCategory":{{"id":"{}","name":"Home"}}}}"#,
            Uuid::new_v4(),
            parent_id
        );
        let category: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category.parent_name(), Some("Home"));

        let top: Category =
            serde_json::from_str(&format!(r#"{{"id":"{}","name":"Home"}}"#, parent_id)).unwrap();
        assert!(top.is_parent());
    }
}
