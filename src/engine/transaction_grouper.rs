use std::collections::HashMap;

use crate::domain::Transaction;

/// Transactions that fall on one UTC day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub day: u32,
    pub transactions: Vec<&'a Transaction>,
}

pub struct TransactionGrouper;

impl TransactionGrouper {
    /// Buckets transactions by day of month.
    ///
    /// Days appear in the order first encountered, not calendar order; within a
    /// day the input order is kept.
    pub fn by_day<'a, I>(transactions: I) -> Vec<DayGroup<'a>>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut groups: Vec<DayGroup<'a>> = Vec::new();
        let mut positions: HashMap<u32, usize> = HashMap::new();
        for transaction in transactions {
            let day = transaction.day_of_month();
            let position = *positions.entry(day).or_insert_with(|| {
                groups.push(DayGroup {
                    day,
                    transactions: Vec::new(),
                });
                groups.len() - 1
            });
            groups[position].transactions.push(transaction);
        }
        groups
    }
}
