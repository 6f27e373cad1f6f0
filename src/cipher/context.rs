//! src/cipher/context.rs
//! Stateful CBC context bound to a single key, IV and direction.

use crate::aliases::{Aes128Key16, Block16, Iv16};
use crate::cipher::padding::{pad_block, strip_padding};
use crate::consts::BLOCK_SIZE;
use crate::error::FilecipherError;
use crate::utils::xor_in_place;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128Dec, Aes128Enc, Block as AesBlock};
use std::fmt;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Which way bytes flow through the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

enum BlockCipher {
    Encrypt(Aes128Enc),
    Decrypt(Aes128Dec),
}

/// AES-128-CBC state carried across successive [`update`](Self::update) calls.
///
/// Input may arrive in any slice sizes; partial blocks are buffered
/// internally. In decrypt mode the most recent plaintext block is held back
/// until either more ciphertext arrives or [`finalize`](Self::finalize) strips
/// its padding, so `update` never emits bytes that might turn out to be padding.
pub struct CbcContext {
    cipher: BlockCipher,
    /// Previous ciphertext block; the IV before the first block.
    chain: Block16,
    pending: Block16,
    pending_len: usize,
    /// Decrypt only: last plaintext block, not yet written.
    held: Block16,
    has_held: bool,
}

impl CbcContext {
    /// Bind a key and IV to a direction. The key is consumed and zeroized
    /// once the AES key schedule has been built from it.
    pub fn new(direction: Direction, key: Aes128Key16, iv: &Iv16) -> Self {
        let key_bytes = key.expose_secret();
        let cipher = match direction {
            Direction::Encrypt => BlockCipher::Encrypt(Aes128Enc::new(key_bytes.into())),
            Direction::Decrypt => BlockCipher::Decrypt(Aes128Dec::new(key_bytes.into())),
        };
        drop(key);

        Self {
            cipher,
            chain: Block16::new(*iv.expose_secret()),
            pending: Block16::new([0u8; BLOCK_SIZE]),
            pending_len: 0,
            held: Block16::new([0u8; BLOCK_SIZE]),
            has_held: false,
        }
    }

    pub fn direction(&self) -> Direction {
        match self.cipher {
            BlockCipher::Encrypt(_) => Direction::Encrypt,
            BlockCipher::Decrypt(_) => Direction::Decrypt,
        }
    }

    /// Transform `input`, appending every completed output block to `output`.
    ///
    /// Appends at most `input.len() + BLOCK_SIZE` bytes.
    pub fn update(&mut self, mut input: &[u8], output: &mut Vec<u8>) {
        while !input.is_empty() {
            let take = (BLOCK_SIZE - self.pending_len).min(input.len());
            self.pending.expose_secret_mut()[self.pending_len..self.pending_len + take]
                .copy_from_slice(&input[..take]);
            self.pending_len += take;
            input = &input[take..];

            if self.pending_len == BLOCK_SIZE {
                self.process_full_block(output);
                self.pending_len = 0;
            }
        }
    }

    /// Finish the stream.
    ///
    /// Encrypt: pads the buffered tail (always 1..=16 bytes) and emits the
    /// final ciphertext block. Decrypt: validates and strips the padding of
    /// the held block and emits what remains of it.
    pub fn finalize(mut self, output: &mut Vec<u8>) -> Result<(), FilecipherError> {
        match self.direction() {
            Direction::Encrypt => {
                pad_block(&mut self.pending, self.pending_len);
                self.process_full_block(output);
                Ok(())
            }
            Direction::Decrypt => {
                if self.pending_len != 0 {
                    return Err(FilecipherError::Padding(format!(
                        "ciphertext ends with a partial block of {} bytes",
                        self.pending_len
                    )));
                }
                if !self.has_held {
                    return Err(FilecipherError::Padding(
                        "ciphertext body is empty".into(),
                    ));
                }
                let keep = strip_padding(&self.held)?;
                output.extend_from_slice(&self.held.expose_secret()[..keep]);
                Ok(())
            }
        }
    }

    #[inline(always)]
    fn process_full_block(&mut self, output: &mut Vec<u8>) {
        match &self.cipher {
            BlockCipher::Encrypt(cipher) => {
                let block = self.pending.expose_secret_mut();
                xor_in_place(block, self.chain.expose_secret());

                let mut aes_block = AesBlock::from(*block);
                cipher.encrypt_block(&mut aes_block);

                let chain = self.chain.expose_secret_mut();
                chain.copy_from_slice(aes_block.as_slice());
                output.extend_from_slice(&chain[..]);
            }
            BlockCipher::Decrypt(cipher) => {
                if self.has_held {
                    output.extend_from_slice(self.held.expose_secret());
                }

                let ciphertext = *self.pending.expose_secret();
                let mut aes_block = AesBlock::from(ciphertext);
                cipher.decrypt_block(&mut aes_block);

                let plain = self.held.expose_secret_mut();
                plain.copy_from_slice(aes_block.as_slice());
                xor_in_place(plain, self.chain.expose_secret());

                *self.chain.expose_secret_mut() = ciphertext;
                self.has_held = true;
            }
        }
    }
}

impl fmt::Debug for CbcContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CbcContext")
            .field("direction", &self.direction())
            .field("pending_len", &self.pending_len)
            .field("has_held", &self.has_held)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Aes128Key16 {
        Aes128Key16::new([0x2B; 16])
    }

    fn iv() -> Iv16 {
        Iv16::new(core::array::from_fn(|i| i as u8))
    }

    fn run(direction: Direction, data: &[u8], split: usize) -> Result<Vec<u8>, FilecipherError> {
        let mut ctx = CbcContext::new(direction, key(), &iv());
        let mut out = Vec::new();
        for piece in data.chunks(split.max(1)) {
            ctx.update(piece, &mut out);
        }
        ctx.finalize(&mut out)?;
        Ok(out)
    }

    #[test]
    fn output_length_always_padded() {
        for len in [0usize, 1, 15, 16, 17, 31, 32, 100] {
            let ct = run(Direction::Encrypt, &vec![7u8; len], 16).unwrap();
            assert_eq!(ct.len(), (len / 16 + 1) * 16, "len {len}");
        }
    }

    #[test]
    fn split_points_do_not_matter() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let reference = run(Direction::Encrypt, &data, 1000).unwrap();
        for split in [1, 3, 16, 17, 250] {
            assert_eq!(run(Direction::Encrypt, &data, split).unwrap(), reference);
            assert_eq!(run(Direction::Decrypt, &reference, split).unwrap(), data);
        }
    }

    #[test]
    fn decrypt_holds_back_last_block() {
        let ct = run(Direction::Encrypt, b"exactly sixteen!", 16).unwrap();
        assert_eq!(ct.len(), 32);

        let mut ctx = CbcContext::new(Direction::Decrypt, key(), &iv());
        let mut out = Vec::new();
        ctx.update(&ct, &mut out);
        assert_eq!(out, b"exactly sixteen!");
        ctx.finalize(&mut out).unwrap();
        assert_eq!(out, b"exactly sixteen!");
    }

    #[test]
    fn decrypt_rejects_partial_and_empty_body() {
        let err = run(Direction::Decrypt, &[0u8; 20], 16).unwrap_err();
        assert!(err.is_padding());

        let err = run(Direction::Decrypt, &[], 16).unwrap_err();
        assert_eq!(err.to_string(), "Padding error: ciphertext body is empty");
    }

    #[test]
    fn direction_reported() {
        let ctx = CbcContext::new(Direction::Decrypt, key(), &iv());
        assert_eq!(ctx.direction(), Direction::Decrypt);
        assert!(format!("{ctx:?}").contains("Decrypt"));
    }
}
