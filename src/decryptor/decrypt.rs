//! src/decryptor/decrypt.rs
//! Stream-level decryption of `[IV (16)] [ciphertext]`.

use crate::aliases::PasswordString;
use crate::cipher::{CbcContext, Direction};
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::crypto::kdf::derive_key_new;
use crate::error::FilecipherError;
use crate::iv::read_iv;
use crate::stream::run_transform;
use std::io::{Read, Write};

/// Decrypt `input` into `output`.
///
/// Returns the number of plaintext bytes written. A wrong password almost
/// always surfaces as [`FilecipherError::Padding`]; in that case up to all
/// but the final block of garbage plaintext has already been written.
pub fn decrypt<R, W>(
    mut input: R,
    output: W,
    password: &PasswordString,
) -> Result<u64, FilecipherError>
where
    R: Read,
    W: Write,
{
    let iv = read_iv(&mut input)?;
    let key = derive_key_new(password)?;

    let ctx = CbcContext::new(Direction::Decrypt, key, &iv);
    run_transform(ctx, input, output, DEFAULT_CHUNK_SIZE)
}
