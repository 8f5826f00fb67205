//! # Codec Benchmarks
//!
//! Conditions:
//! - NOOP requests (smallest PDU)
//! - PUT requests with keys from 16 bytes to 4 KiB
//! - Rejection cost of tampered PDUs, which must not be cheaper than a
//!   successful verification

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use kinetic_codec::{build_request, decode, encode, OperationKind};
use kinetic_types::{compute_tag, HmacKey};
use rand::Rng;
use std::time::Duration;

const KEY_SIZES: [usize; 4] = [16, 256, 1024, 4096];

fn secret() -> HmacKey {
    HmacKey::from("asdfasdf")
}

fn random_bytes(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

pub fn bench_compute_tag(c: &mut Criterion) {
    let mut group = c.benchmark_group("kinetic/compute_tag");
    let key = secret();

    for size in KEY_SIZES {
        let payload = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| black_box(compute_tag(black_box(payload), &key)))
        });
    }

    group.finish();
}

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("kinetic/encode");
    let key = secret();

    let noop = build_request(OperationKind::Noop, 1234, 1, None).unwrap_or_default();
    group.bench_function("noop", |b| {
        b.iter(|| black_box(encode(black_box(&noop), 1, &key)))
    });

    for size in KEY_SIZES {
        let user_key = random_bytes(size);
        let Ok(put) = build_request(OperationKind::Put, 1234, 7, Some(&user_key)) else {
            continue;
        };
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("put", size), &put, |b, put| {
            b.iter(|| black_box(encode(black_box(put), 1, &key)))
        });
    }

    group.finish();
}

pub fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("kinetic/decode");
    group.measurement_time(Duration::from_secs(5));
    let key = secret();

    for size in KEY_SIZES {
        let user_key = random_bytes(size);
        let Ok(put) = build_request(OperationKind::Put, 1234, 7, Some(&user_key)) else {
            continue;
        };
        let pdu = encode(&put, 1, &key);

        let mut tampered = pdu.clone();
        if let Some(last) = tampered.last_mut() {
            *last ^= 0x01;
        }

        group.throughput(Throughput::Bytes(pdu.len() as u64));
        group.bench_with_input(BenchmarkId::new("valid", size), &pdu, |b, pdu| {
            b.iter(|| black_box(decode(black_box(pdu), &key)))
        });
        group.bench_with_input(BenchmarkId::new("tampered", size), &tampered, |b, pdu| {
            b.iter(|| black_box(decode(black_box(pdu), &key)))
        });
    }

    group.finish();
}
