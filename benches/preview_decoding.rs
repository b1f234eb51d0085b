// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::media::{self, preview};
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;

fn encoded_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode benchmark png");
    bytes.into_inner()
}

fn preview_decoding_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_decoding");
    let source = encoded_png(1024, 768);

    for max_edge in [256u32, 512, 1024] {
        group.bench_with_input(
            BenchmarkId::new("decode_png_1024x768", max_edge),
            &max_edge,
            |b, &max_edge| {
                b.iter(|| {
                    let _ = black_box(media::decode_preview(source.clone(), max_edge));
                });
            },
        );
    }

    group.bench_function("thumbnail_dimensions", |b| {
        b.iter(|| black_box(preview::thumbnail_dimensions(black_box(4000), black_box(3000), 512)));
    });

    group.finish();
}

criterion_group!(benches, preview_decoding_benchmark);
criterion_main!(benches);
