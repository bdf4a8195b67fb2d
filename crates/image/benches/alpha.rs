//! Benchmarks for alpha inspection and variant sizing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use respimg_image::{alpha_min, calculate_dimensions, resize_for_width};

fn bench_alpha_min(c: &mut Criterion) {
    let opaque = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1600, 800, Rgba([20, 30, 40, 255])));
    let mut partial = RgbaImage::from_pixel(1600, 800, Rgba([20, 30, 40, 255]));
    partial.put_pixel(1599, 799, Rgba([0, 0, 0, 40]));
    let partial = DynamicImage::ImageRgba8(partial);

    c.bench_function("alpha_min_opaque_1600x800", |b| {
        b.iter(|| alpha_min(black_box(&opaque)))
    });

    c.bench_function("alpha_min_partial_1600x800", |b| {
        b.iter(|| alpha_min(black_box(&partial)))
    });
}

fn bench_dimensions(c: &mut Criterion) {
    c.bench_function("calculate_dimensions", |b| {
        b.iter(|| calculate_dimensions(black_box(2000), black_box(1000), black_box(960)))
    });
}

fn bench_resize(c: &mut Criterion) {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1000, 500, Rgba([200, 100, 50, 128])));

    c.bench_function("resize_lanczos3_1000_to_640", |b| {
        b.iter(|| resize_for_width(black_box(&img), 640).width())
    });
}

criterion_group!(benches, bench_alpha_min, bench_dimensions, bench_resize);
criterion_main!(benches);
