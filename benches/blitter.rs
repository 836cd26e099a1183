use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scrollblit::bench::{blit, FrameBuffer};
use scrollblit::camera::Camera;
use scrollblit::colors::ALPHA;

const BUFFER_WIDTH: u32 = 640;
const BUFFER_HEIGHT: u32 = 480;

fn checker_source(width: u32, height: u32) -> Vec<u32> {
    (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            if (x + y) % 2 == 0 {
                0x00FF_FFFF
            } else {
                0x0012_3456
            }
        })
        .collect()
}

fn keyed_source(width: u32, height: u32) -> Vec<u32> {
    (0..width * height)
        .map(|i| if i % 2 == 0 { ALPHA } else { 0x00AB_CDEF })
        .collect()
}

fn benchmark_blit_scales(c: &mut Criterion) {
    let mut group = c.benchmark_group("blit_scale");

    let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let camera = Camera::new(0, 0, BUFFER_WIDTH, BUFFER_HEIGHT);
    let source = checker_source(16, 16);

    for scale in [1u32, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| {
                blit(
                    &mut fb,
                    &camera,
                    black_box(&source),
                    16,
                    16,
                    100,
                    100,
                    scale,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_blit_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("blit_source");

    let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let camera = Camera::new(0, 0, BUFFER_WIDTH, BUFFER_HEIGHT);

    for (name, width, height) in [("tile", 16u32, 16u32), ("strip", 256, 16), ("sheet", 256, 256)] {
        let source = checker_source(width, height);
        group.bench_function(name, |b| {
            b.iter(|| {
                blit(
                    &mut fb,
                    &camera,
                    black_box(&source),
                    height,
                    width,
                    0,
                    0,
                    1,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_transparency_keying(c: &mut Criterion) {
    let mut group = c.benchmark_group("blit_keying");

    let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let camera = Camera::new(0, 0, BUFFER_WIDTH, BUFFER_HEIGHT);
    let opaque = checker_source(64, 64);
    let keyed = keyed_source(64, 64);

    group.bench_function("opaque", |b| {
        b.iter(|| blit(&mut fb, &camera, black_box(&opaque), 64, 64, 0, 0, 2));
    });
    group.bench_function("half_keyed", |b| {
        b.iter(|| blit(&mut fb, &camera, black_box(&keyed), 64, 64, 0, 0, 2));
    });

    group.finish();
}

fn benchmark_offscreen_culling(c: &mut Criterion) {
    let mut group = c.benchmark_group("blit_culling");

    let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let camera = Camera::new(0, 0, BUFFER_WIDTH, BUFFER_HEIGHT);
    let source = checker_source(64, 64);

    group.bench_function("fully_visible", |b| {
        b.iter(|| blit(&mut fb, &camera, black_box(&source), 64, 64, 100, 100, 1));
    });
    group.bench_function("fully_offscreen", |b| {
        b.iter(|| blit(&mut fb, &camera, black_box(&source), 64, 64, -2000, -2000, 1));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_blit_scales,
    benchmark_blit_sources,
    benchmark_transparency_keying,
    benchmark_offscreen_culling
);
criterion_main!(benches);
