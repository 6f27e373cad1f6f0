// src/crypto/mod.rs

//! Low-level crypto primitives: password → key, and OS randomness for IVs.
//!
//! The block cipher itself lives in [`crate::cipher`].

pub mod kdf;
pub mod rng;
