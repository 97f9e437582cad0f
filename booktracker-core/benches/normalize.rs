//! Normalization benchmarks

use booktracker_core::normalize::{normalize_local, normalize_volumes};
use booktracker_core::{LocalPage, VolumeSearch};
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

fn volume_search(n: usize) -> VolumeSearch {
    let items: Vec<_> = (0..n)
        .map(|i| {
            json!({
                "id": format!("vol-{}", i),
                "volumeInfo": {
                    "title": format!("Title {}", i),
                    "authors": ["First Author", "Second Author"],
                    "imageLinks": { "thumbnail": format!("http://img/{}?img=1&zoom=1", i) },
                    "description": "d".repeat(300)
                }
            })
        })
        .collect();
    serde_json::from_value(json!({ "items": items })).expect("valid fixture")
}

fn local_page(n: usize) -> LocalPage {
    let content: Vec<_> = (0..n)
        .map(|i| json!({ "id": i, "title": format!("Local {}", i), "author": "Someone" }))
        .collect();
    serde_json::from_value(json!({ "content": content })).expect("valid fixture")
}

fn normalize_benchmark(c: &mut Criterion) {
    let search = volume_search(40);
    c.bench_function("normalize_volumes_40", |b| {
        b.iter(|| normalize_volumes(std::hint::black_box(search.clone()), 0))
    });

    let page = local_page(40);
    c.bench_function("normalize_local_40", |b| {
        b.iter(|| normalize_local(std::hint::black_box(page.clone()), 0))
    });
}

criterion_group!(benches, normalize_benchmark);
criterion_main!(benches);
