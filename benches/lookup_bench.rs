//! Benchmarks for lexfile lookup and iteration

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexfile::compare::{CommentProcessor, DataLineComparator, IndexLineComparator};
use lexfile::store::{BinarySearchStore, DirectAccessStore, LineStore};
use lexfile::{Buffer, ContentType, DataKind, POS};

fn index_store(entries: usize) -> LineStore {
    let mut text = String::new();
    for i in 0..entries {
        text.push_str(&format!("lemma{:06} n {}\n", i, i % 7 + 1));
    }
    let content = Arc::new(ContentType::new(
        Some(POS::Noun),
        DataKind::Index,
        Arc::new(IndexLineComparator),
        Some(Arc::new(CommentProcessor)),
    ));
    LineStore::BinarySearch(BinarySearchStore::new(
        "index.noun",
        content,
        Buffer::from_bytes(text.into_bytes()),
    ))
}

fn data_store(entries: usize) -> (LineStore, Vec<String>) {
    let mut text = String::new();
    let mut keys = Vec::with_capacity(entries);
    for i in 0..entries {
        let key = format!("{:08}", text.len());
        text.push_str(&format!("{} record {}\n", key, i));
        keys.push(key);
    }
    let content = Arc::new(ContentType::new(
        Some(POS::Noun),
        DataKind::Data,
        Arc::new(DataLineComparator),
        Some(Arc::new(CommentProcessor)),
    ));
    let store = LineStore::DirectAccess(DirectAccessStore::new(
        "data.noun",
        content,
        Buffer::from_bytes(text.into_bytes()),
    ));
    (store, keys)
}

fn lookup_benchmarks(c: &mut Criterion) {
    let store = index_store(10_000);
    c.bench_function("binary_search_lookup_10k", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let key = format!("lemma{:06}", (i * 2654435761) % 10_000);
            i = i.wrapping_add(1);
            black_box(store.lookup(&key))
        })
    });

    let (store, keys) = data_store(10_000);
    c.bench_function("direct_access_lookup_10k", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let key = &keys[(i * 2654435761) % keys.len()];
            i = i.wrapping_add(1);
            black_box(store.lookup(key))
        })
    });
}

fn iteration_benchmarks(c: &mut Criterion) {
    let store = index_store(10_000);
    c.bench_function("full_iteration_10k", |b| {
        b.iter(|| black_box(store.iter().count()))
    });
}

criterion_group!(benches, lookup_benchmarks, iteration_benchmarks);
criterion_main!(benches);
