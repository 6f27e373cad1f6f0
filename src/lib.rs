// src/lib.rs

//! # filecipher-rs
//!
//! Password-based AES-128-CBC file encryption.
//!
//! `<dir>/<name>` encrypts to `<dir>/en_<name>` and decrypts to
//! `<dir>/de_<name>`. The encrypted file is the 16-byte random IV followed by
//! the CBC ciphertext of the PKCS#7-padded plaintext; the key is the first 16
//! bytes of SHA-1(password). Files of any size are processed in 1 KiB chunks.
//!
//! There is no authentication tag: a wrong password is detected only through
//! the padding check on the final block.
//!
//! ```no_run
//! use filecipher_rs::aliases::PasswordString;
//! use filecipher_rs::diagnostics::LogSink;
//! use filecipher_rs::{decrypt_file, encrypt_file};
//!
//! let password = PasswordString::new("correct horse".to_string());
//! let encrypted = encrypt_file("/tmp/report.txt", &password, LogSink)?;
//! let decrypted = decrypt_file(&encrypted, &password, LogSink)?;
//! assert!(decrypted.ends_with("de_en_report.txt"));
//! # Ok::<(), filecipher_rs::FilecipherError>(())
//! ```

pub mod aliases;
pub mod builders;
pub mod cipher;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod diagnostics;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod iv;
pub mod operation;
pub mod paths;
pub mod stream;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_file, Decryptor};
pub use encryptor::{encrypt, encrypt_file, encrypt_with_iv, Encryptor};
pub use error::{FilecipherError, IvError};
pub use operation::{Direction, FileCipherOperation, OperationState};

pub use builders::options_builder::OperationOptions;
pub use crypto::kdf::{derive_key, derive_key_new};
pub use header::{inspect, inspect_file};
pub use stream::run_transform;
