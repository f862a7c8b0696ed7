//! Criterion micro-benchmarks for route log recording, decoding and replay.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glyphwalk_bench::{reference_profile, unbounded_solver};
use glyphwalk_core::Direction;
use glyphwalk_engine::WalkConfig;
use glyphwalk_replay::codec::{decode_frame, encode_frame};
use glyphwalk_replay::{grid_hash, record_solve, replay_and_compare, Frame, RouteReader};

fn bench_codec(c: &mut Criterion) {
    let frame = Frame {
        step: 12_345,
        direction: Direction::Left,
        state_hash: 0x0123_4567_89ab_cdef,
    };
    let mut encoded = Vec::new();
    encode_frame(&mut encoded, &frame).unwrap();

    c.bench_function("encode_frame", |b| {
        let mut buf = Vec::with_capacity(32);
        b.iter(|| {
            buf.clear();
            encode_frame(&mut buf, black_box(&frame)).unwrap();
        });
    });
    c.bench_function("decode_frame", |b| {
        b.iter(|| black_box(decode_frame(&mut encoded.as_slice()).unwrap()));
    });
}

fn bench_record_replay(c: &mut Criterion) {
    let reference = reference_profile();
    let solver = unbounded_solver();
    let mut log = Vec::new();
    record_solve(&reference, &solver, &mut log).unwrap();

    c.bench_function("grid_hash_reference", |b| {
        b.iter(|| black_box(grid_hash(&reference)));
    });
    c.bench_function("record_reference", |b| {
        let mut buf = Vec::with_capacity(log.len());
        b.iter(|| {
            buf.clear();
            record_solve(&reference, &solver, &mut buf).unwrap();
        });
    });
    c.bench_function("replay_reference", |b| {
        b.iter(|| {
            let reader = RouteReader::open(log.as_slice()).unwrap();
            black_box(replay_and_compare(reader, reference.clone(), WalkConfig::default()).unwrap())
        });
    });
}

criterion_group!(benches, bench_codec, bench_record_replay);
criterion_main!(benches);
