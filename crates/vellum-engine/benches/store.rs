use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vellum_engine::editing::Alignment;
mod common;

fn bench_store_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_writes");
    group.sample_size(20);

    group.bench_function("writable_commit_100_blocks", |b| {
        b.iter(|| {
            let mut model = common::build_model(100);
            let keys: Vec<_> = model.keys().collect();
            let mut txn = model.begin();
            for key in keys {
                let node = txn.writable(key).unwrap();
                node.set_alignment(Alignment::Justify);
                node.set_inset(3);
            }
            let commit = txn.commit();
            black_box(commit);
        });
    });

    group.finish();
}

fn bench_store_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_reads");
    group.sample_size(20);

    let model = common::build_model(100);
    let keys: Vec<_> = model.keys().collect();

    group.bench_function("latest_100_blocks", |b| {
        b.iter(|| {
            for key in &keys {
                let node = model.latest(black_box(*key));
                black_box(node);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_store_writes, bench_store_reads);
criterion_main!(benches);
