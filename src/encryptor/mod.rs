// src/encryptor/mod.rs

//! Encryption facade.
//!
//! File API: [`Encryptor`] / [`encrypt_file`] write `<dir>/en_<name>`.
//! Stream API: [`encrypt`] writes IV + ciphertext to any `Write`.

pub(crate) mod encrypt;
pub(crate) mod file;

pub use encrypt::{encrypt, encrypt_with_iv};
pub use file::{encrypt_file, Encryptor};
