use criterion::{Criterion, black_box, criterion_group, criterion_main};
mod common;

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    group.sample_size(20);

    let model = common::build_model(100);

    group.bench_function("export_100_blocks", |b| {
        b.iter(|| {
            let exported = model.export();
            black_box(exported);
        });
    });

    group.bench_function("export_to_json_string", |b| {
        b.iter(|| {
            let json = serde_json::to_string(&model.export()).unwrap();
            black_box(json);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_export);
criterion_main!(benches);
