use criterion::{criterion_group, criterion_main, Criterion};
use maxheap_rs::MaxHeap;
use rand::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let values: Vec<i32> = (0..1024).map(|_| rng.gen()).collect();

    let mut heap = MaxHeap::new(values.len() + 1);
    for &v in &values {
        heap.insert(v).unwrap();
    }
    c.bench_function("insert_pop", |b| {
        b.iter(|| {
            heap.insert(rng.gen()).unwrap();
            heap.pop().unwrap()
        })
    });

    c.bench_function("sort_1024", |b| {
        b.iter(|| MaxHeap::from_vec(values.clone()).into_sorted_vec())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
