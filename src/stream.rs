//! src/stream.rs
//! Chunked streaming loop shared by both directions.
//!
//! Memory use is fixed by `chunk_size`: one read buffer of that size and one
//! output buffer of at most `chunk_size + BLOCK_SIZE` bytes, reused for the
//! whole file.

use crate::aliases::ChunkBuffer;
use crate::cipher::CbcContext;
use crate::consts::BLOCK_SIZE;
use crate::error::FilecipherError;
use std::io::{ErrorKind, Read, Write};
use secure_gate::{RevealSecret, RevealSecretMut};

/// Pump `source` through `ctx` into `destination` until end of input.
///
/// Reads up to `chunk_size` bytes at a time, writes whatever whole blocks the
/// context yields, then finalizes the context (padding on encrypt, padding
/// check on decrypt) and flushes `destination`.
///
/// Returns the number of bytes written to `destination`. Any I/O error aborts
/// the transform as-is; bytes already written stay written.
pub fn run_transform<R, W>(
    mut ctx: CbcContext,
    mut source: R,
    mut destination: W,
    chunk_size: usize,
) -> Result<u64, FilecipherError>
where
    R: Read,
    W: Write,
{
    if chunk_size == 0 {
        return Err(FilecipherError::Config("chunk size must be at least 1".into()));
    }

    let mut chunk = ChunkBuffer::new(vec![0u8; chunk_size]);
    let mut produced = ChunkBuffer::new(Vec::with_capacity(chunk_size + BLOCK_SIZE));
    let mut written: u64 = 0;
    let mut chunks: u64 = 0;

    loop {
        let n = match source.read(chunk.expose_secret_mut()) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        chunks += 1;

        let out = produced.expose_secret_mut();
        out.clear();
        ctx.update(&chunk.expose_secret()[..n], out);
        if !out.is_empty() {
            destination.write_all(out)?;
            written += out.len() as u64;
        }
    }

    let out = produced.expose_secret_mut();
    out.clear();
    ctx.finalize(out)?;
    destination.write_all(out)?;
    written += out.len() as u64;
    destination.flush()?;

    log::debug!("stream transform done: {chunks} chunks read, {written} bytes written");
    Ok(written)
}
