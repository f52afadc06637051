//! Recorded spending and the payload used to create it.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::*, money::Money};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<Uuid>,
}

impl Transaction {
    pub fn new(
        category_id: Option<Uuid>,
        amount: Money,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            amount,
            description: description.into(),
            date,
            budget_id: None,
        }
    }

    /// Calendar day of the month the transaction falls on, in UTC.
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToCategory for Transaction {
    fn category_id(&self) -> Option<Uuid> {
        self.category_id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> Money {
        self.amount
    }
}

/// Payload accepted by a write collaborator; the identifier is assigned on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(default)]
    pub category_id: Option<Uuid>,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
}

impl NewTransaction {
    pub fn into_transaction(self, id: Uuid, budget_id: Uuid) -> Transaction {
        Transaction {
            id,
            category_id: self.category_id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            budget_id: Some(budget_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_of_month_is_taken_in_utc() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 23, 59, 0).unwrap();
        let txn = Transaction::new(None, Money::from_cents(100), "Late snack", date);
        assert_eq!(txn.day_of_month(), 7);
    }

    #[test]
    fn offset_timestamps_normalize_to_utc_day() {
        let json = format!(
            r#"{{"id":"{}","amount":500,"description":"Taxi","date":"2024-03-08T01:30:00+03:00"}}"#,
            Uuid::new_v4()
        );
        let txn: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.day_of_month(), 7);
        assert_eq!(txn.category_id, None);
    }

    #[test]
    fn new_transaction_keeps_payload_fields() {
        let budget_id = Uuid::new_v4();
        let category_id = Uuid::new_v4();
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let payload = NewTransaction {
            category_id: Some(category_id),
            amount: Money::from_cents(2599),
            description: "Books".into(),
            date,
        };
        let id = Uuid::new_v4();
        let txn = payload.into_transaction(id, budget_id);
        assert_eq!(txn.id, id);
        assert_eq!(txn.budget_id, Some(budget_id));
        assert_eq!(txn.category_id, Some(category_id));
        assert_eq!(txn.amount, Money::from_cents(2599));
    }
}
