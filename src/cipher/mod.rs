// src/cipher/mod.rs

//! AES-128-CBC with PKCS#7 padding, one block at a time.
//!
//! [`CbcContext`] is the single stateful object that the streaming loop in
//! [`crate::stream`] drives; [`padding`] holds the pad/unpad rules.

pub(crate) mod context;
pub(crate) mod padding;

pub use context::{CbcContext, Direction};
pub use padding::{pad_block, strip_padding};
