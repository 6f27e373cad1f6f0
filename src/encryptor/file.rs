//! src/encryptor/file.rs
//! File encryption: `<dir>/<name>` → `<dir>/en_<name>`.

use crate::aliases::PasswordString;
use crate::builders::options_builder::OperationOptions;
use crate::diagnostics::DiagnosticSink;
use crate::error::FilecipherError;
use crate::operation::{Direction, FileCipherOperation, OperationState};
use std::path::{Path, PathBuf};

/// Encrypts one file into its `en_` sibling.
///
/// Configuration happens in [`new`](Self::new): the destination is created
/// (an existing file is truncated) and a fresh IV is written into it. If any
/// of that fails the error is reported to the sink and returned by
/// [`encrypt`](Self::encrypt).
pub struct Encryptor<S: DiagnosticSink> {
    inner: FileCipherOperation<S>,
}

impl<S: DiagnosticSink> Encryptor<S> {
    pub fn new(path: impl AsRef<Path>, password: &PasswordString, sink: S) -> Self {
        Self::with_options(path, password, sink, OperationOptions::default())
    }

    pub fn with_options(
        path: impl AsRef<Path>,
        password: &PasswordString,
        sink: S,
        options: OperationOptions,
    ) -> Self {
        Self {
            inner: FileCipherOperation::with_options(
                Direction::Encrypt,
                path,
                password,
                sink,
                options,
            ),
        }
    }

    /// Append the ciphertext of the source after the stored IV.
    ///
    /// Returns the number of ciphertext bytes written (IV excluded).
    pub fn encrypt(&mut self) -> Result<u64, FilecipherError> {
        self.inner.run()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.inner.destination()
    }

    pub fn state(&self) -> OperationState {
        self.inner.state()
    }

    pub fn into_sink(self) -> S {
        self.inner.into_sink()
    }
}

/// Encrypt `path` and return the path of the `en_` file.
pub fn encrypt_file<S: DiagnosticSink>(
    path: impl AsRef<Path>,
    password: &PasswordString,
    sink: S,
) -> Result<PathBuf, FilecipherError> {
    let mut encryptor = Encryptor::new(path, password, sink);
    encryptor.encrypt()?;
    encryptor
        .destination()
        .map(Path::to_path_buf)
        .ok_or_else(|| FilecipherError::NotConfigured("no destination path".into()))
}
