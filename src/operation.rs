//! # File operations
//!
//! [`FileCipherOperation`] turns `<dir>/<name>` into `<dir>/en_<name>` or
//! `<dir>/de_<name>`. One type covers both directions; they differ only in
//! key-schedule direction, where the IV comes from, and the output prefix.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──► Configured ──run()──► Completed
//!   │                      │
//!   └──────► Failed ◄──────┘
//! ```
//!
//! Construction never fails loudly: problems are written to the sink, logged,
//! and kept so that [`run`](FileCipherOperation::run) can hand back the typed
//! error.
//!
//! ## Concurrency
//!
//! Each operation owns its key, IV, cipher state and file handles. Nothing is
//! shared between operations. Running two operations against the same source
//! or destination path at the same time is not guarded against and is the
//! caller's responsibility.

pub use crate::cipher::Direction;

use crate::aliases::PasswordString;
use crate::builders::options_builder::OperationOptions;
use crate::cipher::CbcContext;
use crate::consts::IV_LENGTH;
use crate::crypto::kdf::derive_key_new;
use crate::diagnostics::{error_line, setup_error_line, DiagnosticSink, Milestone};
use crate::error::FilecipherError;
use crate::iv;
use crate::paths::destination_path;
use crate::stream::run_transform;
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Where an operation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    /// Key derived, IV in hand, cipher context ready.
    Configured,
    /// The transform ran to the end and the output is complete.
    Completed,
    /// Configuration or the transform failed. The operation cannot be reused.
    Failed,
}

/// A single-use encrypt or decrypt of one file.
pub struct FileCipherOperation<S: DiagnosticSink> {
    direction: Direction,
    source: PathBuf,
    destination: Option<PathBuf>,
    options: OperationOptions,
    context: Option<CbcContext>,
    setup_error: Option<FilecipherError>,
    state: OperationState,
    sink: S,
}

impl<S: DiagnosticSink> FileCipherOperation<S> {
    /// Configure an operation with default options.
    pub fn new(
        direction: Direction,
        source: impl AsRef<Path>,
        password: &PasswordString,
        sink: S,
    ) -> Self {
        Self::with_options(direction, source, password, sink, OperationOptions::default())
    }

    /// Configure an operation.
    ///
    /// Encrypt: creates (or truncates) the destination and writes a fresh IV
    /// into it. Decrypt: reads the IV from the start of the source.
    pub fn with_options(
        direction: Direction,
        source: impl AsRef<Path>,
        password: &PasswordString,
        sink: S,
        options: OperationOptions,
    ) -> Self {
        let mut op = Self {
            direction,
            source: source.as_ref().to_path_buf(),
            destination: None,
            options,
            context: None,
            setup_error: None,
            state: OperationState::Configured,
            sink,
        };

        match op.configure(password) {
            Ok(ctx) => op.context = Some(ctx),
            Err(e) => {
                op.report_failure(&e, true);
                op.setup_error = Some(e);
            }
        }
        op
    }

    fn configure(&mut self, password: &PasswordString) -> Result<CbcContext, FilecipherError> {
        self.options.validate()?;

        let destination = self
            .destination
            .insert(destination_path(&self.source, self.direction)?);
        let key = derive_key_new(password)?;
        let iv = match self.direction {
            Direction::Encrypt => iv::generate_and_store(destination)?,
            Direction::Decrypt => iv::recover(&self.source)?,
        };

        Ok(CbcContext::new(self.direction, key, &iv))
    }

    /// Stream the whole source through the cipher into the destination.
    ///
    /// Returns the number of bytes written by the transform (the IV prefix of
    /// an encrypted file is not counted; it was written during configuration).
    /// On failure the partial destination file is left on disk.
    pub fn run(&mut self) -> Result<u64, FilecipherError> {
        let ctx = match (self.state, self.context.take()) {
            (OperationState::Configured, Some(ctx)) => ctx,
            (state, _) => {
                return Err(self.setup_error.take().unwrap_or_else(|| {
                    FilecipherError::NotConfigured(format!("operation is {state:?}"))
                }));
            }
        };

        match self.transfer(ctx) {
            Ok(written) => {
                self.state = OperationState::Completed;
                self.milestone(Milestone::Complete);
                Ok(written)
            }
            Err(e) => {
                self.report_failure(&e, false);
                Err(e)
            }
        }
    }

    fn transfer(&mut self, ctx: CbcContext) -> Result<u64, FilecipherError> {
        let destination = self
            .destination
            .clone()
            .ok_or_else(|| FilecipherError::NotConfigured("no destination path".into()))?;

        self.milestone(Milestone::Loading);
        let mut input = File::open(&self.source)?;
        let mut output = match self.direction {
            // IV is already in place; ciphertext goes after it.
            Direction::Encrypt => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&destination)?,
            Direction::Decrypt => {
                input.seek(SeekFrom::Start(IV_LENGTH as u64))?;
                File::create(&destination)?
            }
        };

        self.milestone(Milestone::CreatingStream);
        self.milestone(Milestone::Starting);
        let written = run_transform(ctx, &mut input, &mut output, self.options.chunk_size())?;

        self.milestone(Milestone::Closing);
        drop(input);
        // Close errors surface here rather than being lost in `drop`.
        output.sync_all()?;
        drop(output);

        log::debug!(
            "{:?} {} -> {}: {written} bytes",
            self.direction,
            self.source.display(),
            destination.display()
        );
        Ok(written)
    }

    fn milestone(&mut self, milestone: Milestone) {
        let text = milestone.describe(self.direction).to_string();
        log::debug!("{text}");
        self.sink.line(&text);
    }

    fn report_failure(&mut self, err: &FilecipherError, during_setup: bool) {
        self.state = OperationState::Failed;
        log::error!(
            "{:?} of {} failed: {err}",
            self.direction,
            self.source.display()
        );
        let text = if during_setup {
            setup_error_line(self.direction, err)
        } else {
            error_line(err)
        };
        self.sink.line(&text);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Output path; `None` only if the source path does not name a file.
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    pub fn state(&self) -> OperationState {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;

    fn password(s: &str) -> PasswordString {
        PasswordString::new(s.to_string())
    }

    #[test]
    fn roundtrip_with_small_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("data.bin");
        let plain: Vec<u8> = (0..3000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&src, &plain).unwrap();

        let opts = OperationOptions::new().with_chunk_size(7);
        let mut enc = FileCipherOperation::with_options(
            Direction::Encrypt,
            &src,
            &password("pw"),
            NullSink,
            opts,
        );
        assert_eq!(enc.state(), OperationState::Configured);
        enc.run().unwrap();
        assert_eq!(enc.state(), OperationState::Completed);

        let en_path = enc.destination().unwrap().to_path_buf();
        let mut dec = FileCipherOperation::with_options(
            Direction::Decrypt,
            &en_path,
            &password("pw"),
            NullSink,
            opts,
        );
        let written = dec.run().unwrap();
        assert_eq!(written, plain.len() as u64);
        assert_eq!(std::fs::read(dec.destination().unwrap()).unwrap(), plain);
    }

    #[test]
    fn run_twice_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        std::fs::write(&src, b"abc").unwrap();

        let mut op = FileCipherOperation::new(Direction::Encrypt, &src, &password("x"), NullSink);
        op.run().unwrap();
        let err = op.run().unwrap_err();
        assert!(matches!(err, FilecipherError::NotConfigured(_)));
        assert_eq!(op.state(), OperationState::Completed);
    }

    #[test]
    fn bad_options_fail_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        std::fs::write(&src, b"abc").unwrap();

        let opts = OperationOptions::new().with_chunk_size(0);
        let mut op = FileCipherOperation::with_options(
            Direction::Encrypt,
            &src,
            &password("x"),
            Vec::<String>::new(),
            opts,
        );
        assert_eq!(op.state(), OperationState::Failed);
        assert!(matches!(op.run().unwrap_err(), FilecipherError::Config(_)));
        assert!(!dir.path().join("en_a.txt").exists());

        let lines = op.into_sink();
        assert_eq!(
            lines,
            ["Cannot encrypt password: Configuration error: chunk size must be at least 1"]
        );
    }
}
