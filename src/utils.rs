// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Block-level helpers shared by the encrypt and decrypt directions.

use crate::consts::BLOCK_SIZE;

/// XORs `other` into `block` in place.
///
/// Used for CBC chaining on both sides. Fixed-size arrays keep the loop
/// free of bounds checks and let LLVM vectorize it into a single 128-bit XOR.
#[inline(always)]
pub fn xor_in_place(block: &mut [u8; BLOCK_SIZE], other: &[u8; BLOCK_SIZE]) {
    for (b, o) in block.iter_mut().zip(other.iter()) {
        *b ^= *o;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_involution() {
        let original = [0x5Au8; 16];
        let key: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut block = original;
        xor_in_place(&mut block, &key);
        assert_ne!(block, original);
        xor_in_place(&mut block, &key);
        assert_eq!(block, original);
    }
}
