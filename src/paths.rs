//! Destination path derivation.
//!
//! Output always lands next to the source: `<dir>/en_<name>` for encryption,
//! `<dir>/de_<name>` for decryption. An existing file at that path is
//! overwritten without warning.

use crate::consts::{DECRYPT_PREFIX, ENCRYPT_PREFIX};
use crate::error::FilecipherError;
use crate::operation::Direction;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name prefix for a direction.
#[inline]
pub const fn prefix(direction: Direction) -> &'static str {
    match direction {
        Direction::Encrypt => ENCRYPT_PREFIX,
        Direction::Decrypt => DECRYPT_PREFIX,
    }
}

/// Sibling output path for `source`.
///
/// Fails if `source` has no final file name component (`/`, `..`, empty).
pub fn destination_path(source: &Path, direction: Direction) -> Result<PathBuf, FilecipherError> {
    let name = source.file_name().ok_or_else(|| {
        FilecipherError::Path(format!("'{}' does not name a file", source.display()))
    })?;

    let mut prefixed = OsString::from(prefix(direction));
    prefixed.push(name);

    Ok(match source.parent() {
        Some(dir) => dir.join(prefixed),
        None => PathBuf::from(prefixed),
    })
}
