//! Shared traits for budgeting records.

use uuid::Uuid;

use crate::domain::money::Money;

/// Exposes a stable identifier for records fetched from the system of record.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Associates records with an optional category reference.
pub trait BelongsToCategory {
    fn category_id(&self) -> Option<Uuid>;
}

/// Supplies a common contract for retrieving amounts.
pub trait Amounted {
    fn amount(&self) -> Money;
}

/// Sums the amounts of any sequence of amounted records.
pub fn sum_amounts<'a, T, I>(items: I) -> Money
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
