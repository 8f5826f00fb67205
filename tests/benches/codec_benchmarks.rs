//! # Kinetic PDU Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | compute_tag, 4 KiB | < 20µs |
//! | encode NOOP | < 2µs |
//! | decode, valid or tampered | same order as encode |

use criterion::{criterion_group, criterion_main};
use kinetic_tests::benchmarks::codec::{bench_compute_tag, bench_decode, bench_encode};

criterion_group!(benches, bench_compute_tag, bench_encode, bench_decode);
criterion_main!(benches);
