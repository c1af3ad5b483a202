use criterion::{criterion_group, criterion_main};

mod concurrent;

use concurrent::register_benchmarks as register_concurrent_benchmarks;
use operations::register_benchmarks as register_operations_benchmarks;

// Define the benchmark groups
criterion_group!(
    benches,
    register_operations_benchmarks,
    register_concurrent_benchmarks,
);

criterion_main!(benches);
