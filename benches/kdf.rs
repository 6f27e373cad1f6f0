//! benches/kdf.rs
//! Password → key derivation cost (single SHA-1 pass)
use filecipher_rs::aliases::{Aes128Key16, PasswordString};
use filecipher_rs::derive_key;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");

    for &len in &[8usize, 64, 1024] {
        let pw = PasswordString::new("p".repeat(len));
        group.bench_with_input(BenchmarkId::new("sha1_truncate", len), &len, |b, _| {
            b.iter(|| {
                let mut key = Aes128Key16::new([0u8; 16]);
                derive_key(black_box(&pw), &mut key).unwrap();
                black_box(key);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
