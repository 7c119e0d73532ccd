// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phg_catalog::core::normalize::{normalize_number, normalize_reference, slugify_stone_name};

const NAMES: [&str; 6] = [
    "Granit Noir",
    "Feuille d'automne chinois",
    "Rose de la Clarté",
    "Vert Olive / Brésil",
    "Bleu   Azul\\Platino",
    "Impala l’Africain",
];

fn bench_slug(c: &mut Criterion) {
    c.bench_function("slugify_stone_name", |b| {
        b.iter(|| {
            for (code, name) in NAMES.iter().enumerate() {
                black_box(slugify_stone_name(black_box(code), black_box(name)));
            }
        })
    });
}

fn bench_reference(c: &mut Criterion) {
    c.bench_function("normalize_reference", |b| {
        b.iter(|| black_box(normalize_reference(black_box(" PHGA - CL - A "))))
    });
}

fn bench_number(c: &mut Criterion) {
    let values: Vec<f64> = (0..1_000).map(|i| i as f64 * 1.0137).collect();
    c.bench_function("normalize_number", |b| {
        b.iter(|| {
            for v in &values {
                black_box(normalize_number(Some(*v), 2));
            }
        })
    });
}

criterion_group!(benches, bench_slug, bench_reference, bench_number);
criterion_main!(benches);
