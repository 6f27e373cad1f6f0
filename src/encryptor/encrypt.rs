//! src/encryptor/encrypt.rs
//! Stream-level encryption: `[IV (16)] [AES-128-CBC(PKCS#7(plaintext))]`.

use crate::aliases::{Iv16, PasswordString};
use crate::cipher::{CbcContext, Direction};
use crate::consts::{DEFAULT_CHUNK_SIZE, IV_LENGTH};
use crate::crypto::kdf::derive_key_new;
use crate::error::FilecipherError;
use crate::iv::{generate_iv, write_iv};
use crate::stream::run_transform;
use std::io::{Read, Write};

/// Encrypt `input` into `output` under a fresh random IV.
///
/// Returns the total number of bytes written, IV included.
pub fn encrypt<R, W>(
    input: R,
    output: W,
    password: &PasswordString,
) -> Result<u64, FilecipherError>
where
    R: Read,
    W: Write,
{
    let iv = generate_iv()?;
    encrypt_with_iv(input, output, password, &iv)
}

/// Encrypt with a caller-chosen IV.
///
/// Deterministic: same input, password and IV give the same bytes. Meant for
/// known-answer tests; reusing an IV across real files leaks equality of
/// their leading blocks.
pub fn encrypt_with_iv<R, W>(
    input: R,
    mut output: W,
    password: &PasswordString,
    iv: &Iv16,
) -> Result<u64, FilecipherError>
where
    R: Read,
    W: Write,
{
    let key = derive_key_new(password)?;
    write_iv(&mut output, iv)?;

    let ctx = CbcContext::new(Direction::Encrypt, key, iv);
    let body = run_transform(ctx, input, output, DEFAULT_CHUNK_SIZE)?;

    Ok(IV_LENGTH as u64 + body)
}
