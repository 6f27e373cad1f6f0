// src/decryptor/mod.rs

//! Decryption facade.
//!
//! File API: [`Decryptor`] / [`decrypt_file`] write `<dir>/de_<name>`.
//! Stream API: [`decrypt`] reads IV + ciphertext from any `Read`.

pub(crate) mod decrypt;
pub(crate) mod file;

pub use decrypt::decrypt;
pub use file::{decrypt_file, Decryptor};
