use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;
use trading_manager::{TradingManager, TransactionType};

fn populated_manager(holders: u32, orders_per_holder: u32) -> TradingManager {
    let manager = TradingManager::new();
    for holder in 1..=holders {
        for _ in 0..orders_per_holder {
            let _ = manager.place_limit_order(holder, TransactionType::Buy, 10, "RHT", 2500);
            let _ = manager.place_market_order(holder, TransactionType::Sell, 10, "RHT");
        }
    }
    manager
}

/// Register all benchmarks for viewing orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("TradingManager - View Orders");

    // Benchmark viewing single orders by identifier
    group.bench_function("view_limit_order_by_id", |b| {
        let manager = populated_manager(10, 100);
        b.iter(|| {
            for id in 1..=100u32 {
                let _ = black_box(manager.view_limit_order(id));
            }
        })
    });

    // Benchmark holder views at varying result bounds
    for max_results in [10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::new("view_stock_holder_limit_orders", max_results),
            max_results,
            |b, &max_results| {
                let manager = populated_manager(10, 100);
                b.iter(|| {
                    let orders =
                        black_box(manager.view_stock_holder_limit_orders(5, max_results));
                    assert!(orders.len() <= max_results);
                })
            },
        );
    }

    // Benchmark snapshot creation
    group.bench_function("create_snapshot", |b| {
        let manager = populated_manager(10, 100);
        b.iter(|| {
            let _ = black_box(manager.create_snapshot());
        })
    });

    group.finish();
}
