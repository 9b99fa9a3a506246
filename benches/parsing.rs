use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textdb::{parse_indental, parse_tablatal};

fn indental_source(categories: usize) -> String {
    let mut source = String::new();
    for cat in 0..categories {
        source.push_str(&format!("CATEGORY {cat}\n"));
        for key in 0..8 {
            source.push_str(&format!("  KEY {key} : value {cat} {key}\n"));
        }
        source.push_str("  TAGS\n");
        for item in 0..4 {
            source.push_str(&format!("    item {item}\n"));
        }
    }
    source
}

fn tablatal_source(rows: usize) -> String {
    let mut source = String::from("NAME        AGE   COLOR       NOTES\n");
    for row in 0..rows {
        source.push_str(&format!(
            "{:<12}{:<6}{:<12}note {row}\n",
            format!("person{row}"),
            row % 100,
            "periwinkle"
        ));
    }
    source
}

fn benchmark_parse_indental(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_indental");
    for categories in [10, 100, 1000] {
        let source = indental_source(categories);
        group.bench_with_input(
            BenchmarkId::from_parameter(categories),
            &source,
            |b, source| b.iter(|| parse_indental(black_box(source))),
        );
    }
    group.finish();
}

fn benchmark_parse_tablatal(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_tablatal");
    for rows in [10, 100, 1000] {
        let source = tablatal_source(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &source, |b, source| {
            b.iter(|| parse_tablatal(black_box(source)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_parse_indental, benchmark_parse_tablatal);
criterion_main!(benches);
