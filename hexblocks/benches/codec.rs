use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexblocks::{decode_bytes, encode_bytes, Backend};

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 1) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let bytes = payload(64 * 1024);
    let mut group = c.benchmark_group("encode_64k");
    group.bench_function("png", |b| {
        b.iter(|| encode_bytes(black_box(&bytes), 256, Backend::Raster).unwrap())
    });
    group.bench_function("svg", |b| {
        b.iter(|| encode_bytes(black_box(&bytes), 256, Backend::Vector).unwrap())
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let bytes = payload(64 * 1024);
    let (_, png) = encode_bytes(&bytes, 256, Backend::Raster).unwrap();
    let (_, svg) = encode_bytes(&bytes, 256, Backend::Vector).unwrap();

    let mut group = c.benchmark_group("decode_64k");
    group.bench_function("png", |b| {
        b.iter(|| decode_bytes(black_box(&png), Backend::Raster).unwrap())
    });
    group.bench_function("svg", |b| {
        b.iter(|| decode_bytes(black_box(&svg), Backend::Vector).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
