use budget_engine::config::EngineConfig;
use budget_engine::domain::{Budget, BudgetedCategory, Category, Money, Transaction};
use budget_engine::engine::{BudgetOverview, BudgetSnapshot, Selection, TransactionView};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_snapshot(txn_count: usize) -> BudgetSnapshot {
    let mut categories = Vec::new();
    let mut allocations = Vec::new();
    for parent_idx in 0..8 {
        let parent = Category::new(format!("Group {parent_idx}"));
        for child_idx in 0..6 {
            let child = Category::child_of(format!("Category {parent_idx}.{child_idx}"), &parent);
            if child_idx % 2 == 0 {
                allocations.push(BudgetedCategory::new(child.id, Money::from_cents(10_000)));
            }
            categories.push(child);
        }
        categories.push(parent);
    }

    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let children: Vec<_> = categories.iter().filter(|c| !c.is_parent()).collect();
    let transactions = (0..txn_count)
        .map(|idx| {
            let category = children[idx % children.len()];
            Transaction::new(
                Some(category.id),
                Money::from_cents(500 + (idx % 100) as i64),
                format!("txn {idx}"),
                start + Duration::hours((idx % (24 * 31)) as i64),
            )
        })
        .collect();

    let budget = Budget::new("Benchmark", Money::from_cents(5_000_000)).with_transactions(transactions);
    BudgetSnapshot::new(budget, categories, allocations)
}

fn bench_aggregation(c: &mut Criterion) {
    let snapshot = build_snapshot(10_000);
    let config = EngineConfig::default();

    c.bench_function("overview_10k", |b| {
        b.iter(|| BudgetOverview::compute(black_box(&snapshot), &config))
    });

    let selection = Selection::parent("Group 3");
    c.bench_function("transaction_view_10k", |b| {
        b.iter(|| TransactionView::compute(black_box(&snapshot), &selection, &config).len())
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
