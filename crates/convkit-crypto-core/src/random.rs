//! Cryptographically secure uniform integers and bytes.
//!
//! Callers receive randomness through the [`RandomnessProvider`] trait so
//! generators can be driven by a scripted source in tests. The production
//! implementation, [`OsRandom`], reads from the OS CSPRNG via `rand::rngs::OsRng`.

use rand::RngCore;

use crate::error::CryptoError;

/// Source of uniformly distributed random values.
///
/// Implementations must be backed by a CSPRNG and safe to share across
/// threads.
pub trait RandomnessProvider: Send + Sync {
    /// Fill `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Random`] if the underlying generator fails.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError>;

    /// Return a uniformly distributed integer in `[0, max)`. `max == 0` yields `0`.
    ///
    /// Uses rejection sampling: draws landing in the final partial block of
    /// `2^32 mod max` values are discarded, so every result is equally likely.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Random`] if the underlying generator fails.
    fn next_below(&self, max: u32) -> Result<u32, CryptoError> {
        if max == 0 {
            return Ok(0);
        }
        // 2^32 mod max, computed without leaving u32.
        let threshold = max.wrapping_neg().checked_rem(max).unwrap_or(0);
        loop {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf)?;
            let draw = u32::from_le_bytes(buf);
            if draw >= threshold {
                return Ok(draw.checked_rem(max).unwrap_or(0));
            }
        }
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Random`] on generator failure, or if `len`
    /// exceeds `u32::MAX`.
    fn index_below(&self, len: usize) -> Result<usize, CryptoError> {
        let max = u32::try_from(len)
            .map_err(|_| CryptoError::Random(format!("range {len} exceeds u32")))?;
        let idx = self.next_below(max)?;
        usize::try_from(idx).map_err(|_| CryptoError::Random("index overflow".to_owned()))
    }
}

/// OS-level CSPRNG (`getrandom` via `rand::rngs::OsRng`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomnessProvider for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        rand::rngs::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::Random(e.to_string()))
    }
}
