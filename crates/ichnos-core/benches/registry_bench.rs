use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ichnos_core::{AllocationRegistry, ObjectId};

// Lookup time should stay flat as the registry grows (hash-map O(1)).
fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("Allocation Registry");

    for &size in &[1_000u64, 10_000, 100_000] {
        let mut registry = AllocationRegistry::new();
        for i in 0..size {
            registry.track(ObjectId::from_raw(i), 64, Vec::new());
        }

        group.bench_with_input(BenchmarkId::new("record lookup", size), &size, |b, &n| {
            let probe = ObjectId::from_raw(n / 2);
            b.iter(|| black_box(registry.record(probe)));
        });
        group.bench_with_input(BenchmarkId::new("stats", size), &size, |b, _| {
            b.iter(|| black_box(registry.stats()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_registry);
criterion_main!(benches);
