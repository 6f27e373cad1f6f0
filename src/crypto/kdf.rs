//! src/crypto/kdf.rs
//! Password → AES-128 key. Single unsalted SHA-1 pass, truncated to 16 bytes.
//!
//! This is the on-disk contract of the format: any other derivation produces
//! keys that cannot open existing files. It is weak against offline guessing
//! (no salt, no work factor); a salted, iterated KDF would need the salt stored
//! in the file and therefore a new format.

use crate::aliases::{Aes128Key16, PasswordString};
use crate::consts::KEY_LENGTH;
use crate::error::FilecipherError;
use sha1::{Digest, Sha1};
use secure_gate::{RevealSecret, RevealSecretMut};

/// Derive the AES-128 key directly into a caller-provided secure buffer.
///
/// The password is hashed as raw UTF-8 bytes. Deterministic: the same password
/// always yields the same key.
#[inline]
pub fn derive_key(
    password: &PasswordString,
    out_key: &mut Aes128Key16,
) -> Result<(), FilecipherError> {
    let digest = Sha1::digest(password.expose_secret().as_bytes());

    let material = digest.get(..KEY_LENGTH).ok_or_else(|| {
        FilecipherError::KeyDerivation(format!(
            "digest too short: {} bytes, need {KEY_LENGTH}",
            digest.len()
        ))
    })?;

    out_key.expose_secret_mut().copy_from_slice(material);
    Ok(())
}

/// Convenience: derive and return a fresh secure key.
#[inline]
pub fn derive_key_new(password: &PasswordString) -> Result<Aes128Key16, FilecipherError> {
    let mut key = Aes128Key16::new([0u8; KEY_LENGTH]);
    derive_key(password, &mut key)?;
    Ok(key)
}
