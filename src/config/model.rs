use serde::{Deserialize, Serialize};

pub const DEFAULT_UNBUDGETED_LABEL: &str = "Other categories";
pub const DEFAULT_LOG_FILTER: &str = "budget_engine=info";

/// How a category without a parent is grouped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TopLevelGrouping {
    /// A top-level category has no group name; lookups report it as not found.
    #[default]
    Exclude,
    /// A top-level category forms a group under its own name.
    OwnName,
}

/// Tunable behaviour of the aggregation engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Label shown for the bucket of spending with no allocation.
    #[serde(default = "EngineConfig::default_unbudgeted_label")]
    pub unbudgeted_label: String,
    #[serde(default)]
    pub top_level_grouping: TopLevelGrouping,
    /// Default `tracing` directive, combined with `RUST_LOG` at startup.
    #[serde(default = "EngineConfig::default_log_filter")]
    pub log_filter: String,
}

impl EngineConfig {
    fn default_unbudgeted_label() -> String {
        DEFAULT_UNBUDGETED_LABEL.into()
    }

    fn default_log_filter() -> String {
        DEFAULT_LOG_FILTER.into()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            unbudgeted_label: Self::default_unbudgeted_label(),
            top_level_grouping: TopLevelGrouping::default(),
            log_filter: Self::default_log_filter(),
        }
    }
}
