//! # IV handling
//!
//! Every encrypted file starts with its 16-byte IV in the clear. Encryption
//! draws a fresh IV from the OS and writes it as the first bytes of the
//! destination; decryption reads it back from the first bytes of the source.

use crate::aliases::Iv16;
use crate::consts::IV_LENGTH;
use crate::crypto::rng::random_fixed;
use crate::error::{FilecipherError, IvError};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Fresh random IV from the OS entropy source.
#[inline]
pub fn generate_iv() -> Result<Iv16, FilecipherError> {
    Ok(random_fixed::<IV_LENGTH>()?)
}

/// Write `iv` as raw bytes.
#[inline]
pub fn write_iv<W: Write>(writer: &mut W, iv: &Iv16) -> Result<(), FilecipherError> {
    writer.write_all(iv.expose_secret()).map_err(IvError::Write)?;
    Ok(())
}

/// Read exactly [`IV_LENGTH`] bytes.
///
/// Unlike `read_exact`, a short source is reported as
/// [`IvError::Truncated`] with the number of bytes actually present.
pub fn read_iv<R: Read>(reader: &mut R) -> Result<Iv16, FilecipherError> {
    let mut iv = Iv16::new([0u8; IV_LENGTH]);
    let mut filled = 0;

    while filled < IV_LENGTH {
        match reader.read(&mut iv.expose_secret_mut()[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if filled < IV_LENGTH {
        return Err(IvError::Truncated {
            expected: IV_LENGTH,
            actual: filled,
        }
        .into());
    }
    Ok(iv)
}

/// Generate an IV and store it at the start of a newly created (or
/// truncated) file at `dest_path`.
///
/// The file is closed again before returning; the caller reopens it in
/// append mode so ciphertext lands right after the IV.
pub fn generate_and_store(dest_path: &Path) -> Result<Iv16, FilecipherError> {
    let iv = generate_iv()?;

    let mut file = File::create(dest_path).map_err(IvError::Write)?;
    write_iv(&mut file, &iv)?;
    file.flush().map_err(IvError::Write)?;

    log::debug!("stored {IV_LENGTH}-byte IV at {}", dest_path.display());
    Ok(iv)
}

/// Read the IV stored at the start of `src_path`.
pub fn recover(src_path: &Path) -> Result<Iv16, FilecipherError> {
    let mut file = File::open(src_path)?;
    read_iv(&mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_iv_exact_and_short() {
        let bytes: Vec<u8> = (0..20).collect();
        let mut cursor = Cursor::new(&bytes);
        let iv = read_iv(&mut cursor).unwrap();
        assert_eq!(&iv.expose_secret()[..], &bytes[..16]);
        assert_eq!(cursor.position(), 16);

        let err = read_iv(&mut Cursor::new(&bytes[..5])).unwrap_err();
        match err {
            FilecipherError::Iv(IvError::Truncated { expected, actual }) => {
                assert_eq!((expected, actual), (16, 5));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn store_then_recover() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en_x");
        std::fs::write(&path, b"stale content that must be truncated away").unwrap();

        let iv = generate_and_store(&path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 16);
        assert_eq!(recover(&path).unwrap().expose_secret(), iv.expose_secret());
    }

    #[test]
    fn store_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("en_x");
        let err = generate_and_store(&path).unwrap_err();
        assert!(matches!(err, FilecipherError::Iv(IvError::Write(_))));
    }

    #[test]
    fn recover_missing_file_is_io() {
        let err = recover(Path::new("/definitely/not/here.bin")).unwrap_err();
        assert!(matches!(err, FilecipherError::Io(_)));
    }
}
