pub mod contention;

// Import concurrent benchmarks into the main bench group
pub fn register_benchmarks(c: &mut criterion::Criterion) {
    contention::register_benchmarks(c);
}
