use criterion::Criterion;
use std::hint::black_box;
use trading_manager::{TradingManager, TransactionType};

/// Register all benchmarks for cancelling orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("TradingManager - Cancel Orders");

    // Benchmark place-then-cancel cycles
    group.bench_function("place_and_cancel_limit_orders", |b| {
        b.iter(|| {
            let manager = TradingManager::new();
            for _ in 0..100 {
                let id = manager
                    .place_limit_order(1, TransactionType::Buy, 10, "RHT", 2500)
                    .unwrap();
                let _ = black_box(manager.cancel_limit_order(id));
            }
        })
    });

    // Benchmark the not-found path
    group.bench_function("cancel_missing_limit_orders", |b| {
        let manager = TradingManager::new();
        b.iter(|| {
            for id in 1..=100u32 {
                let _ = black_box(manager.cancel_limit_order(id));
            }
        })
    });

    group.finish();
}
