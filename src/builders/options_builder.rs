//! src/builders/options_builder.rs
//! Per-run options for file operations.

use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::FilecipherError;

/// Tunables for a single encrypt/decrypt run.
///
/// None of these change the on-disk format; two runs with different options
/// produce byte-identical output for the same key and IV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationOptions {
    chunk_size: usize,
}

impl OperationOptions {
    /// Defaults: [`DEFAULT_CHUNK_SIZE`] (1024) bytes per read.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Bytes read from the source per loop iteration. Must be non-zero;
    /// checked by [`validate`](Self::validate) when the operation is configured.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn validate(&self) -> Result<(), FilecipherError> {
        if self.chunk_size == 0 {
            return Err(FilecipherError::Config("chunk size must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for OperationOptions {
    fn default() -> Self {
        Self::new()
    }
}
