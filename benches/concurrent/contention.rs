use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use trading_manager::{TradingManager, TransactionType};

/// Register benchmarks for concurrent access to a shared manager
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("TradingManager - Concurrent");
    group.sample_size(20);

    // Concurrent placements from several threads against one manager
    for threads in [2u32, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("concurrent_placements", threads),
            threads,
            |b, &threads| {
                b.iter(|| {
                    let manager = Arc::new(TradingManager::new());
                    let handles: Vec<_> = (0..threads)
                        .map(|holder| {
                            let manager = Arc::clone(&manager);
                            thread::spawn(move || {
                                for _ in 0..50 {
                                    let _ = black_box(manager.place_limit_order(
                                        holder,
                                        TransactionType::Buy,
                                        10,
                                        "RHT",
                                        2500,
                                    ));
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                })
            },
        );
    }

    // Writers placing and cancelling while readers run holder views
    group.bench_function("mixed_read_write", |b| {
        b.iter(|| {
            let manager = Arc::new(TradingManager::new());

            let writer = {
                let manager = Arc::clone(&manager);
                thread::spawn(move || {
                    for _ in 0..50 {
                        if let Ok(id) =
                            manager.place_market_order(1, TransactionType::Sell, 10, "RHT")
                        {
                            let _ = manager.cancel_market_order(id);
                        }
                    }
                })
            };

            let reader = {
                let manager = Arc::clone(&manager);
                thread::spawn(move || {
                    for _ in 0..50 {
                        let _ = black_box(manager.view_stock_holder_market_orders(1, 10));
                    }
                })
            };

            writer.join().unwrap();
            reader.join().unwrap();
        })
    });

    group.finish();
}
