#![doc(test(attr(deny(warnings))))]

//! Budget Engine turns a fetched budget, its transactions, the category tree
//! and the per-category allocations into the figures a budget page shows:
//! spend per category, remaining allowance, and transaction lists filtered by
//! parent group and bucketed by day.
//!
//! ```
//! use budget_engine::domain::{Budget, BudgetedCategory, Category, Money, Transaction};
//! use budget_engine::engine::{BudgetSnapshot, SpendCalculator};
//! use chrono::{TimeZone, Utc};
//!
//! let food = Category::new("Food");
//! let groceries = Category::child_of("Groceries", &food);
//! let allocation = BudgetedCategory::new(groceries.id, Money::from_cents(200));
//! let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
//! let budget = Budget::new("March", Money::from_cents(1000)).with_transactions(vec![
//!     Transaction::new(Some(groceries.id), Money::from_cents(150), "Market", date),
//! ]);
//!
//! let snapshot = BudgetSnapshot::new(budget, vec![food, groceries], vec![allocation]);
//! let summary = snapshot.spend_summary();
//! assert_eq!(summary.rest_to_spend, Money::from_cents(850));
//! assert_eq!(summary.available_for_others, Money::from_cents(800));
//! assert_eq!(
//!     SpendCalculator::total_spent(snapshot.transactions()),
//!     Money::from_cents(150)
//! );
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod source;
pub mod utils;

pub use errors::{EngineError, Result};

use std::sync::Once;

use crate::config::EngineConfig;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing from the default configuration and emits a startup log.
pub fn init() {
    init_with(&EngineConfig::default());
}

/// Initializes global tracing using the log filter from `config`.
pub fn init_with(config: &EngineConfig) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(&config.log_filter);
        tracing::info!("Budget Engine tracing initialized.");
    });
}
