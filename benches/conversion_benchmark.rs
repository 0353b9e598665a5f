//! Benchmarks for the conversion engine and chart builder

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use unit_converter::{Category, build_chart_spec, convert};

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("length", |b| {
        b.iter(|| convert(Category::Length, black_box(1.5), "Mile", "Inch"))
    });

    group.bench_function("weight", |b| {
        b.iter(|| convert(Category::Weight, black_box(12.0), "Ounce", "Gram"))
    });

    group.bench_function("temperature", |b| {
        b.iter(|| convert(Category::Temperature, black_box(98.6), "Fahrenheit", "Kelvin"))
    });

    group.bench_function("all_length_pairs", |b| {
        let units = Category::Length.units();
        b.iter(|| {
            for from in units {
                for to in units {
                    let _ = convert(Category::Length, black_box(3.0), from, to);
                }
            }
        })
    });

    group.finish();
}

fn bench_chart(c: &mut Criterion) {
    c.bench_function("build_chart_spec", |b| {
        b.iter(|| build_chart_spec(black_box(1.0), black_box(1000.0), "Kilometer", "Meter"))
    });
}

criterion_group!(benches, bench_convert, bench_chart);
criterion_main!(benches);
