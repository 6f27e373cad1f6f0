//! src/decryptor/file.rs
//! File decryption: `<dir>/<name>` → `<dir>/de_<name>`.

use crate::aliases::PasswordString;
use crate::builders::options_builder::OperationOptions;
use crate::diagnostics::DiagnosticSink;
use crate::error::FilecipherError;
use crate::operation::{Direction, FileCipherOperation, OperationState};
use std::path::{Path, PathBuf};

/// Decrypts one file into its `de_` sibling.
///
/// [`new`](Self::new) reads the IV from the first 16 bytes of the source; a
/// shorter source fails configuration with
/// [`IvError::Truncated`](crate::error::IvError::Truncated).
pub struct Decryptor<S: DiagnosticSink> {
    inner: FileCipherOperation<S>,
}

impl<S: DiagnosticSink> Decryptor<S> {
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
                Direction::Decrypt,
                path,
                password,
                sink,
                options,
            ),
        }
    }

    /// Skip the IV, decrypt the rest of the source, write (truncating) the
    /// destination. Returns the number of plaintext bytes written.
    pub fn decrypt(&mut self) -> Result<u64, FilecipherError> {
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

/// Decrypt `path` and return the path of the `de_` file.
pub fn decrypt_file<S: DiagnosticSink>(
    path: impl AsRef<Path>,
    password: &PasswordString,
    sink: S,
) -> Result<PathBuf, FilecipherError> {
    let mut decryptor = Decryptor::new(path, password, sink);
    decryptor.decrypt()?;
    decryptor
        .destination()
        .map(Path::to_path_buf)
        .ok_or_else(|| FilecipherError::NotConfigured("no destination path".into()))
}
