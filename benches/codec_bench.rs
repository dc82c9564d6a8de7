use base65536::io_stream::EncodeWriter;
use base65536::{decode, encode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Write;

fn payload(len: usize) -> Vec<u8> {
    // Fixed xorshift stream so every run encodes the same bytes.
    let mut state = 0x2545F4914F6CDD1Du64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as u8
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let data = payload(1024 * 1024);

    c.bench_function("encode_1mb", |b| b.iter(|| encode(black_box(&data))));
}

fn bench_decode(c: &mut Criterion) {
    let data = payload(1024 * 1024);
    let text = encode(&data);

    c.bench_function("decode_1mb", |b| b.iter(|| decode(black_box(&text)).unwrap()));
}

fn bench_stream_writer(c: &mut Criterion) {
    let data = payload(1024 * 1024);

    c.bench_function("stream_encode_1mb_8k_chunks", |b| {
        b.iter(|| {
            let mut writer = EncodeWriter::new(Vec::new());
            for chunk in black_box(&data).chunks(8 * 1024) {
                writer.write_all(chunk).unwrap();
            }
            writer.finish().unwrap()
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_stream_writer);
criterion_main!(benches);
