use serde::{Deserialize, Serialize};

/// Which slice of the transaction list is on display.
///
/// Owned by the caller and passed into each filter call; the engine keeps no
/// selection state of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Unbudgeted,
    Parent(String),
}

impl Selection {
    pub fn parent(name: impl Into<String>) -> Self {
        Selection::Parent(name.into())
    }

    /// Selecting the active parent again clears the filter.
    pub fn toggled_parent(&self, name: &str) -> Self {
        if self.is_selected_parent(name) {
            Selection::All
        } else {
            Selection::parent(name)
        }
    }

    pub fn is_selected_parent(&self, name: &str) -> bool {
        matches!(self, Selection::Parent(current) if current == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_same_parent_clears_selection() {
        let selection = Selection::All.toggled_parent("Home");
        assert_eq!(selection, Selection::parent("Home"));
        assert!(selection.is_selected_parent("Home"));
        assert_eq!(selection.toggled_parent("Home"), Selection::All);
    }

    #[test]
    fn toggling_other_parent_switches_selection() {
        let selection = Selection::parent("Home").toggled_parent("Food");
        assert_eq!(selection, Selection::parent("Food"));
        assert_eq!(Selection::Unbudgeted.toggled_parent("Food"), Selection::parent("Food"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&Selection::parent("Home")).unwrap();
        assert_eq!(json, r#"{"kind":"parent","name":"Home"}"#);
        let all: Selection = serde_json::from_str(r#"{"kind":"all"}"#).unwrap();
        assert_eq!(all, Selection::All);
    }
}
