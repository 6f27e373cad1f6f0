//! # Constants
//!
//! Fixed parameters of the single supported suite (AES-128, CBC, PKCS#7)
//! and the naming contract for output files.

/// AES block size in bytes. Also the length of the stored IV.
pub const BLOCK_SIZE: usize = 16;

/// Length of the password-derived AES-128 key.
pub const KEY_LENGTH: usize = 16;

/// Length of the IV prefix at the start of every encrypted file.
pub const IV_LENGTH: usize = BLOCK_SIZE;

/// Number of bytes read from the source per loop iteration.
///
/// Output is written at most `chunk_size + BLOCK_SIZE` bytes at a time, so this
/// value bounds the memory used by a transform regardless of file size.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// File name prefix of encrypted output.
pub const ENCRYPT_PREFIX: &str = "en_";

/// File name prefix of decrypted output.
pub const DECRYPT_PREFIX: &str = "de_";
