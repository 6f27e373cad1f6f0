//! src/cipher/padding.rs
//! PKCS#7 block padding (identical to PKCS#5 for a 16-byte block).

use crate::aliases::Block16;
use crate::consts::BLOCK_SIZE;
use crate::error::FilecipherError;
use subtle::ConstantTimeEq;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Pad the first `used` bytes of `block` up to a full block.
///
/// Always adds 1..=16 bytes: a caller with a full block must call this on a
/// fresh block with `used == 0`, which yields sixteen `0x10` bytes.
#[inline]
pub fn pad_block(block: &mut Block16, used: usize) {
    debug_assert!(used < BLOCK_SIZE);
    let pad = (BLOCK_SIZE - used) as u8;
    block.expose_secret_mut()[used..].fill(pad);
}

/// Validate the padding of the final decrypted block and return the number
/// of plaintext bytes it carries.
///
/// The pad value must be in `1..=16` and every pad byte must equal it. The
/// pad bytes are compared in constant time.
#[inline]
pub fn strip_padding(block: &Block16) -> Result<usize, FilecipherError> {
    let block = block.expose_secret();
    let padding = block[BLOCK_SIZE - 1];

    if padding == 0 || padding as usize > BLOCK_SIZE {
        return Err(FilecipherError::Padding(format!(
            "invalid pad length {padding}"
        )));
    }

    let start = BLOCK_SIZE - padding as usize;
    let expected = [padding; BLOCK_SIZE];
    // Range check above may exit early; the byte comparison must not.
    if !bool::from(block[start..].ct_eq(&expected[start..])) {
        return Err(FilecipherError::Padding("inconsistent pad bytes".into()));
    }

    Ok(start)
}
