//! # Layout inspection
//!
//! Cheap structural check of an encrypted file without the password: is there
//! a full IV, and is the body a non-empty whole number of AES blocks?
//!
//! Passing this check does not mean the password is right or that the file
//! was produced by this format; it only rules out files that certainly were not.

use crate::aliases::Iv16;
use crate::consts::{BLOCK_SIZE, IV_LENGTH};
use crate::error::FilecipherError;
use crate::iv::read_iv;
use std::fmt;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::ops::RangeInclusive;
use std::path::Path;

/// What an encrypted file looks like from the outside.
pub struct EncryptedLayout {
    iv: Iv16,
    body_len: u64,
}

impl EncryptedLayout {
    /// The IV stored in the first 16 bytes.
    pub fn iv(&self) -> &Iv16 {
        &self.iv
    }

    /// Ciphertext length after the IV.
    pub fn body_len(&self) -> u64 {
        self.body_len
    }

    /// Body is non-empty and block aligned.
    pub fn is_plausible(&self) -> bool {
        self.body_len > 0 && self.body_len % BLOCK_SIZE as u64 == 0
    }

    /// Possible plaintext lengths, given 1..=16 bytes of padding.
    pub fn plaintext_len_range(&self) -> Option<RangeInclusive<u64>> {
        if !self.is_plausible() {
            return None;
        }
        Some(self.body_len - BLOCK_SIZE as u64..=self.body_len - 1)
    }
}

impl fmt::Debug for EncryptedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedLayout")
            .field("body_len", &self.body_len)
            .field("plausible", &self.is_plausible())
            .finish_non_exhaustive()
    }
}

/// Inspect an encrypted stream starting at the reader's current position.
///
/// Leaves the reader positioned at its end.
///
/// # Errors
///
/// - [`IvError::Truncated`](crate::error::IvError::Truncated) if fewer than 16 bytes remain
/// - [`FilecipherError::Io`] on read/seek failure
///
/// # Example
///
/// ```
/// use filecipher_rs::header::inspect;
/// use std::io::Cursor;
///
/// let layout = inspect(Cursor::new(vec![0u8; 16 + 32]))?;
/// assert!(layout.is_plausible());
/// assert_eq!(layout.plaintext_len_range(), Some(16..=31));
/// # Ok::<(), filecipher_rs::FilecipherError>(())
/// ```
pub fn inspect<R: Read + Seek>(mut reader: R) -> Result<EncryptedLayout, FilecipherError> {
    let start = reader.stream_position()?;
    let iv = read_iv(&mut reader)?;
    let end = reader.seek(SeekFrom::End(0))?;

    Ok(EncryptedLayout {
        iv,
        body_len: end.saturating_sub(start + IV_LENGTH as u64),
    })
}

/// [`inspect`] on a file path.
pub fn inspect_file(path: impl AsRef<Path>) -> Result<EncryptedLayout, FilecipherError> {
    inspect(File::open(path)?)
}
