//! Pure aggregation over a budget snapshot.
//!
//! Nothing in here performs I/O or holds state between calls.

pub mod allocation_grouper;
pub mod breakdown;
pub mod category_index;
pub mod overview;
pub mod selection;
pub mod snapshot;
pub mod spend;
pub mod transaction_filter;
pub mod transaction_grouper;

pub use allocation_grouper::{AllocationGroup, BudgetedCategoryGrouper};
pub use breakdown::{CategoryLine, ParentGroupLine};
pub use category_index::CategoryIndex;
pub use overview::{BudgetOverview, DayView, TransactionRow, TransactionView};
pub use selection::Selection;
pub use snapshot::BudgetSnapshot;
pub use spend::{SpendCalculator, SpendSummary};
pub use transaction_filter::TransactionFilter;
pub use transaction_grouper::{DayGroup, TransactionGrouper};
