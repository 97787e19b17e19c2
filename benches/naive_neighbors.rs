use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use starbot::neighbors::{naive_neighbors, NeighborQuery, QueryPoint};
use starbot::stars::{RecordStore, StarRecord};

fn spiral_store(size: usize) -> RecordStore {
    (0..size)
        .map(|i| {
            let t = i as f64 * 0.1;
            StarRecord::new(i.to_string(), format!("Star {i}"), t.cos() * t, t.sin() * t, t)
        })
        .collect()
}

fn bench_naive_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_neighbors");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let store = spiral_store(*size);
        let by_point = NeighborQuery::new(10, QueryPoint::coordinates(1.0, 2.0, 3.0));
        let by_name = NeighborQuery::new(10, QueryPoint::named(&format!("Star {}", size / 2)));

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("by_point", size), &store, |b, store| {
            b.iter(|| naive_neighbors(black_box(store), black_box(&by_point)))
        });
        group.bench_with_input(BenchmarkId::new("by_name", size), &store, |b, store| {
            b.iter(|| naive_neighbors(black_box(store), black_box(&by_name)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_naive_neighbors);
criterion_main!(benches);
