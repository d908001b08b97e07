use abac::{decode, encode};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn bench_random_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("coder_random");
    let mut rng = StdRng::seed_from_u64(0xbe7c);
    let mut input = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut input);
    let bit_length = input.len() * 8;
    let context_length = 16;

    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| encode(&input, bit_length, context_length).unwrap())
    });

    let encoded = encode(&input, bit_length, context_length).unwrap();
    group.bench_function("decode", |b| {
        b.iter(|| decode(&encoded, bit_length, context_length).unwrap())
    });
}

fn bench_skewed_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("coder_skewed");
    // Mostly zero input: the fast path where renormalization rarely emits.
    let mut input = vec![0u8; 64 * 1024];
    for i in (0..input.len()).step_by(97) {
        input[i] = 0x10;
    }
    let bit_length = input.len() * 8;
    let context_length = 16;

    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| encode(&input, bit_length, context_length).unwrap())
    });

    let encoded = encode(&input, bit_length, context_length).unwrap();
    group.bench_function("decode", |b| {
        b.iter(|| decode(&encoded, bit_length, context_length).unwrap())
    });
}

criterion_group!(benches, bench_random_data, bench_skewed_data);
criterion_main!(benches);
