//! Codec Benchmarks
//!
//! Throughput of the decode/encode pipelines and the heavier transforms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pcmwave::{decode_bytes, encode, AudioBuffer};

fn ten_seconds_stereo() -> AudioBuffer {
    let samples = (0..44100 * 10 * 2)
        .map(|i: i32| ((i * 31) % 65536 - 32768) as i16)
        .collect();
    AudioBuffer::new(44100, 2, samples).unwrap()
}

fn benchmark_codec(c: &mut Criterion) {
    let buffer = ten_seconds_stereo();
    let bytes = encode(&buffer);
    let eight_bit = buffer.to_8bit();

    c.bench_function("encode_10s_stereo_16bit", |b| {
        b.iter(|| encode(black_box(&buffer)))
    });
    c.bench_function("decode_10s_stereo_16bit", |b| {
        b.iter(|| decode_bytes(black_box(&bytes)).unwrap())
    });
    c.bench_function("encode_10s_stereo_8bit", |b| {
        b.iter(|| encode(black_box(&eight_bit)))
    });
}

fn benchmark_transforms(c: &mut Criterion) {
    let buffer = ten_seconds_stereo();

    c.bench_function("split_10s_stereo", |b| b.iter(|| black_box(&buffer).split()));
    c.bench_function("mono_10s_stereo", |b| {
        b.iter(|| black_box(&buffer).to_monaural())
    });
}

criterion_group!(benches, benchmark_codec, benchmark_transforms);
criterion_main!(benches);
