use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;

/// Error type surfaced by fallible engine and store operations.
///
/// Lookups of transaction categories never produce one of these: a category
/// that cannot be resolved simply does not match.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Allocation {allocation_id} references unknown category {category_id}")]
    DanglingAllocation { allocation_id: Uuid, category_id: Uuid },
    #[error("Allocation {allocation_id} targets top-level category {category_id} with no group")]
    UngroupedAllocation { allocation_id: Uuid, category_id: Uuid },
    #[error("Budget not found: {0}")]
    BudgetNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, EngineError>;

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Storage(err.to_string())
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err.to_string())
    }
}
