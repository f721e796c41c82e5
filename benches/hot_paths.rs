use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tui_deck::rank::{assign_rank_colors, select_top_n, Rgba};
use tui_deck::table::{Dataset, Schema, Value};

/// Synthetic menu far larger than the shipped sources, so the ranking
/// path is actually exercised
fn synthetic_menu(rows: usize) -> Dataset {
    let schema = Schema::from_headers(
        ["Company", "Item", "Total Fat (g)"].into_iter(),
        &["Total Fat (g)"],
    );
    let companies = ["Alpha", "Bravo", "Charlie", "Delta"];
    let rows = (0..rows)
        .map(|i| {
            vec![
                Value::Text(companies[i % companies.len()].to_string()),
                Value::Text(format!("Item {i}")),
                Value::Number((i % 97) as f64 * 0.7),
            ]
        })
        .collect();
    Dataset::new(schema, rows)
}

fn bench_select_top_n(c: &mut Criterion) {
    let data = synthetic_menu(10_000);
    c.bench_function("select_top_n_10k", |b| {
        b.iter(|| {
            select_top_n(
                black_box(&data),
                "Company",
                "Alpha",
                "Total Fat (g)",
                10,
            )
            .unwrap()
        })
    });
}

fn bench_assign_rank_colors(c: &mut Criterion) {
    let highlight = Rgba::opaque(255, 0, 0);
    let base = Rgba::opaque(0, 0, 255);
    c.bench_function("assign_rank_colors_50", |b| {
        b.iter(|| assign_rank_colors(black_box(50), highlight, base, 0.15))
    });
}

criterion_group!(benches, bench_select_top_n, bench_assign_rank_colors);
criterion_main!(benches);
