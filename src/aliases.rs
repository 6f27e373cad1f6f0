//! # Secure-Gate Type Aliases
//!
//! Secret-carrying buffers used throughout the crate, built on
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate). Every type here
//! zeroizes on drop and only hands out its contents through
//! `.expose_secret()` / `.expose_secret_mut()`.
//!
//! - [`PasswordString`] - operator password, consumed once by the KDF
//! - [`Aes128Key16`] - SHA-1 derived AES-128 key
//! - [`Iv16`] - CBC initialization vector (stored in the clear, wrapped anyway)
//! - [`Block16`] - one AES block of plaintext or chaining state
//! - [`ChunkBuffer`] - the reusable read buffer of the streaming loop

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<16>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PasswordString, String);
dynamic_alias!(pub ChunkBuffer, Vec<u8>); // streaming read/output buffer

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Aes128Key16, 16); // SHA-1(password)[..16]
fixed_alias!(pub Iv16, 16); // file prefix
