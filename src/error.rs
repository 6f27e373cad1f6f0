//! # Error Types
//!
//! Every operation in the crate returns [`Result<T, FilecipherError>`](FilecipherError).
//! The variants map one-to-one onto the failure classes an operator can act on:
//! a wrong password shows up as [`FilecipherError::Padding`], a file that is too
//! short to be ours as [`IvError::Truncated`], everything the OS refused as
//! [`FilecipherError::Io`].

use thiserror::Error;

/// Failures while producing or recovering the 16-byte IV prefix.
#[derive(Error, Debug)]
pub enum IvError {
    /// The source ended before a full IV could be read.
    ///
    /// Never zero-padded: a short file is not an encrypted file.
    #[error("source too short to contain an IV: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    /// The destination could not be created or the IV could not be written to it.
    #[error("cannot write IV to destination: {0}")]
    Write(#[source] std::io::Error),
}

/// The error type for all file cipher operations.
#[derive(Error, Debug)]
pub enum FilecipherError {
    /// The password could not be turned into a key.
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// IV generation, storage or recovery failed.
    #[error("IV error: {0}")]
    Iv(#[from] IvError),

    /// Opening, reading, writing, seeking or flushing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The decrypted final block carries invalid padding, or the ciphertext
    /// body is not a whole number of blocks.
    ///
    /// Usually means a wrong password or an input that was not produced by
    /// this format.
    #[error("Padding error: {0}")]
    Padding(String),

    /// The source path cannot be turned into a sibling destination path.
    #[error("Path error: {0}")]
    Path(String),

    /// Invalid runtime option (e.g. a zero chunk size).
    #[error("Configuration error: {0}")]
    Config(String),

    /// `run()` was called on an operation that is not in the configured state.
    #[error("Operation not configured: {0}")]
    NotConfigured(String),
}

impl FilecipherError {
    /// True when the failure is [`IvError::Truncated`].
    pub fn is_truncated_iv(&self) -> bool {
        matches!(self, FilecipherError::Iv(IvError::Truncated { .. }))
    }

    /// True when the failure is a padding check (typically a wrong password).
    pub fn is_padding(&self) -> bool {
        matches!(self, FilecipherError::Padding(_))
    }
}
