//! tests/common.rs
//! Shared constants and helpers for integration tests

#![allow(dead_code)] // each test binary uses a different subset

use filecipher_rs::aliases::{Iv16, PasswordString};
use std::path::{Path, PathBuf};

/// Password used by the known-answer vectors
pub const TEST_PASSWORD: &str = "Hello";

/// Counting IV 00 01 .. 0f used by the known-answer vectors
pub fn counting_iv() -> Iv16 {
    Iv16::new(core::array::from_fn(|i| i as u8))
}

pub fn password(s: &str) -> PasswordString {
    PasswordString::new(s.to_string())
}

/// Write `contents` to `dir/name` and return the full path
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Deterministic pseudo-random bytes (xorshift)
pub fn pattern_bytes(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}
