pub mod allocation;
pub mod budget;
pub mod category;
pub mod common;
pub mod money;
pub mod transaction;

pub use allocation::BudgetedCategory;
pub use budget::Budget;
pub use category::{Category, ParentRef};
pub use common::{sum_amounts, Amounted, BelongsToCategory, Identifiable, NamedEntity};
pub use money::Money;
pub use transaction::{NewTransaction, Transaction};
