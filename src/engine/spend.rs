//! Spend figures derived from a budget snapshot.
//!
//! Every function is a pure recomputation over its arguments; callers invoke
//! them again whenever the allowance, the allocations or the transactions change.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{sum_amounts, BudgetedCategory, Money, Transaction};

/// All derived figures for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpendSummary {
    pub total_amount: Money,
    pub total_spent: Money,
    pub rest_to_spend: Money,
    pub amount_taken: Money,
    pub unbudgeted_expenses: Money,
    pub available_for_others: Money,
}

pub struct SpendCalculator;

impl SpendCalculator {
    pub fn total_spent(transactions: &[Transaction]) -> Money {
        sum_amounts(transactions)
    }

    /// Allowance left after `total_spent`; negative when overspent.
    pub fn rest_to_spend(total_amount: Money, total_spent: Money) -> Money {
        total_amount - total_spent
    }

    /// Spend per category identifier; transactions without a category are skipped.
    pub fn expenses_by_category(transactions: &[Transaction]) -> HashMap<Uuid, Money> {
        let mut expenses: HashMap<Uuid, Money> = HashMap::new();
        for transaction in transactions {
            if let Some(category_id) = transaction.category_id {
                *expenses.entry(category_id).or_default() += transaction.amount;
            }
        }
        expenses
    }

    /// Spend recorded against the category `allocation` targets.
    pub fn category_expenses(
        allocation: &BudgetedCategory,
        transactions: &[Transaction],
    ) -> Money {
        transactions
            .iter()
            .filter(|txn| txn.category_id == Some(allocation.category_id))
            .map(|txn| txn.amount)
            .sum()
    }

    /// Share of the allowance an allocation holds: its budget, or its spend if larger.
    pub fn contribution(allocation: &BudgetedCategory, expenses: Money) -> Money {
        expenses.max(allocation.budget)
    }

    pub fn amount_taken<'a, I>(allocations: I, transactions: &[Transaction]) -> Money
    where
        I: IntoIterator<Item = &'a BudgetedCategory>,
    {
        let expenses = Self::expenses_by_category(transactions);
        allocations
            .into_iter()
            .map(|allocation| {
                let spent = expenses
                    .get(&allocation.category_id)
                    .copied()
                    .unwrap_or_default();
                Self::contribution(allocation, spent)
            })
            .sum()
    }

    /// True when some allocation targets the transaction's category.
    pub fn is_budgeted(transaction: &Transaction, budgeted: &HashSet<Uuid>) -> bool {
        transaction
            .category_id
            .map_or(false, |category_id| budgeted.contains(&category_id))
    }

    pub fn budgeted_category_ids(allocations: &[BudgetedCategory]) -> HashSet<Uuid> {
        allocations.iter().map(|allocation| allocation.category_id).collect()
    }

    /// Transactions whose category no allocation targets, in input order.
    pub fn unbudgeted_transactions<'t>(
        allocations: &[BudgetedCategory],
        transactions: &'t [Transaction],
    ) -> Vec<&'t Transaction> {
        let budgeted = Self::budgeted_category_ids(allocations);
        transactions
            .iter()
            .filter(|txn| !Self::is_budgeted(txn, &budgeted))
            .collect()
    }

    pub fn unbudgeted_expenses(
        allocations: &[BudgetedCategory],
        transactions: &[Transaction],
    ) -> Money {
        Self::unbudgeted_transactions(allocations, transactions)
            .into_iter()
            .map(|txn| txn.amount)
            .sum()
    }

    /// Allowance left for categories without an allocation; may be negative.
    pub fn available_for_others(
        total_amount: Money,
        allocations: &[BudgetedCategory],
        transactions: &[Transaction],
    ) -> Money {
        total_amount
            - Self::amount_taken(allocations, transactions)
            - Self::unbudgeted_expenses(allocations, transactions)
    }

    pub fn summarize(
        total_amount: Money,
        allocations: &[BudgetedCategory],
        transactions: &[Transaction],
    ) -> SpendSummary {
        let total_spent = Self::total_spent(transactions);
        let amount_taken = Self::amount_taken(allocations, transactions);
        let unbudgeted_expenses = Self::unbudgeted_expenses(allocations, transactions);
        let summary = SpendSummary {
            total_amount,
            total_spent,
            rest_to_spend: Self::rest_to_spend(total_amount, total_spent),
            amount_taken,
            unbudgeted_expenses,
            available_for_others: total_amount - amount_taken - unbudgeted_expenses,
        };
        debug!(
            transactions = transactions.len(),
            allocations = allocations.len(),
            total_spent = %summary.total_spent,
            available_for_others = %summary.available_for_others,
            "computed spend summary"
        );
        summary
    }
}
