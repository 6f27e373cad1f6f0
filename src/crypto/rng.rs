// src/crypto/rng.rs
//! OS-backed randomness for fixed-size secrets.
//!
//! Every IV comes from here. A thread-local `OsRng` keeps the handle around
//! between calls; failures of the entropy source are surfaced, never ignored.

use rand::{rngs::OsRng, TryRngCore};
use secure_gate::{Fixed, RevealSecretMut};
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Fill a fresh `Fixed<[u8; N]>` with OS randomness.
#[inline]
pub fn random_fixed<const N: usize>() -> std::io::Result<Fixed<[u8; N]>> {
    let mut out = Fixed::new([0u8; N]);
    RNG.with(|rng_cell| {
        rng_cell
            .borrow_mut()
            .try_fill_bytes(out.expose_secret_mut())
            .map_err(|e| std::io::Error::other(format!("OS random source failed: {e}")))
    })?;
    Ok(out)
}
