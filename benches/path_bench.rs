//! Benchmarks for path synthesis and value parsing.
//!
//! Both run on every pin operation, ahead of any filesystem access.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sysfs_pin::path::PinPaths;
use sysfs_pin::pin::parse_leading_digits;
use sysfs_pin::{Direction, GpioConfig, Level};

fn bench_pin_paths_new(c: &mut Criterion) {
    let config = GpioConfig::new();

    c.bench_function("pin_paths_new", |b| {
        b.iter(|| black_box(PinPaths::new(&config, black_box(417))));
    });
}

fn bench_direction_path(c: &mut Criterion) {
    let config = GpioConfig::new();
    let Ok(paths) = PinPaths::new(&config, 417) else {
        return;
    };

    c.bench_function("direction_path", |b| {
        b.iter(|| black_box(paths.direction()));
    });
}

fn bench_parse_leading_digits(c: &mut Criterion) {
    c.bench_function("parse_leading_digits", |b| {
        b.iter(|| black_box(parse_leading_digits(black_box(b"1\n"))));
    });
}

fn bench_tokens(c: &mut Criterion) {
    c.bench_function("direction_from_str", |b| {
        b.iter(|| black_box("out".parse::<Direction>()));
    });
    c.bench_function("level_try_from", |b| {
        b.iter(|| black_box(Level::try_from(black_box(1_i32))));
    });
}

criterion_group!(
    benches,
    bench_pin_paths_new,
    bench_direction_path,
    bench_parse_leading_digits,
    bench_tokens,
);

criterion_main!(benches);
