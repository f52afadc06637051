#![allow(dead_code)]

use budget_engine::domain::{Budget, BudgetedCategory, Category, Money, Transaction};
use budget_engine::engine::BudgetSnapshot;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

pub fn cents(value: i64) -> Money {
    Money::from_cents(value)
}

pub fn spent(category: Option<Uuid>, amount: i64, day: u32, description: &str) -> Transaction {
    let date = Utc.with_ymd_and_hms(2024, 5, day, 8, 30, 0).unwrap();
    Transaction::new(category, cents(amount), description, date)
}

/// Categories used across the integration suites.
pub struct Household {
    pub home: Category,
    pub food: Category,
    pub fun: Category,
    pub rent: Category,
    pub power: Category,
    pub groceries: Category,
    pub takeaway: Category,
    pub cinema: Category,
}

impl Household {
    pub fn new() -> Self {
        let home = Category::new("Home");
        let food = Category::new("Food");
        let fun = Category::new("Fun");
        Self {
            rent: Category::child_of("Rent", &home),
            power: Category::child_of("Power", &home),
            groceries: Category::child_of("Groceries", &food),
            takeaway: Category::child_of("Takeaway", &food),
            cinema: Category::child_of("Cinema", &fun),
            home,
            food,
            fun,
        }
    }

    pub fn all(&self) -> Vec<Category> {
        vec![
            self.home.clone(),
            self.food.clone(),
            self.fun.clone(),
            self.rent.clone(),
            self.power.clone(),
            self.groceries.clone(),
            self.takeaway.clone(),
            self.cinema.clone(),
        ]
    }
}

/// May budget: rent, power and groceries are allocated; takeaway and cinema are not.
pub fn may_snapshot() -> (Household, BudgetSnapshot) {
    let h = Household::new();
    let allocations = vec![
        BudgetedCategory::new(h.groceries.id, cents(40_000)),
        BudgetedCategory::new(h.rent.id, cents(120_000)),
        BudgetedCategory::new(h.power.id, cents(9_000)),
    ];
    let transactions = vec![
        spent(Some(h.rent.id), 120_000, 1, "May rent"),
        spent(Some(h.groceries.id), 8_250, 3, "Weekly shop"),
        spent(Some(h.takeaway.id), 2_400, 3, "Pizza"),
        spent(Some(Uuid::new_v4()), 1_000, 9, "Deleted category"),
        spent(Some(h.groceries.id), 9_100, 10, "Weekly shop"),
        spent(None, 500, 3, "Uncategorised"),
        spent(Some(h.cinema.id), 1_800, 12, "Film"),
    ];
    let budget = Budget::new("May", cents(200_000)).with_transactions(transactions);
    let snapshot = BudgetSnapshot::new(budget, h.all(), allocations);
    (h, snapshot)
}
