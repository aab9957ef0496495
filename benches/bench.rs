//! Criterion benchmarks for field retrieval.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use gazetteer_index::prelude::*;
use std::hint::black_box;

/// Generate gazetteer documents for benchmarking.
fn generate_documents(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let mut builder = Document::builder()
                .set(IndexField::IndexName, format!("place {i}"))
                .set(IndexField::Geoname, format!("Place {i}"))
                .set(IndexField::GeonameID, i as i32)
                .set(IndexField::Population, (i as i64) * 1_000)
                .add_boolean("historical", i % 7 == 0);
            if i % 3 != 0 {
                builder = builder.set(IndexField::ParentID, (i / 3) as i32);
            }
            builder.build()
        })
        .collect()
}

fn bench_get_value(c: &mut Criterion) {
    let documents = generate_documents(1_000);
    let stored: Vec<IndexField> = IndexField::ALL
        .into_iter()
        .filter(|field| field.is_stored())
        .collect();

    let mut group = c.benchmark_group("get_value");
    group.throughput(Throughput::Elements(documents.len() as u64));

    group.bench_function("stored_fields", |b| {
        b.iter(|| {
            for doc in &documents {
                for field in &stored {
                    black_box(field.get_value(black_box(doc)));
                }
            }
        })
    });

    group.bench_function("typed_population", |b| {
        b.iter(|| {
            documents
                .iter()
                .filter_map(|doc| IndexField::Population.get::<i64, _>(doc))
                .sum::<i64>()
        })
    });

    group.finish();
}

fn bench_from_key(c: &mut Criterion) {
    let keys: Vec<&str> = IndexField::ALL.iter().map(|f| f.key()).collect();

    c.bench_function("from_key", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(IndexField::from_key(black_box(key)));
            }
        })
    });
}

criterion_group!(benches, bench_get_value, bench_from_key);
criterion_main!(benches);
