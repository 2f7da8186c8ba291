use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};
use slidetile_core::GridSize;

/// A 256-bit seed for reproducible shuffle generation.
///
/// Seeds display as 64 lowercase hex digits and parse from the same form.
///
/// # Examples
///
/// ```
/// use slidetile_generator::ShuffleSeed;
///
/// let seed = ShuffleSeed::from_bytes([0xab; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<ShuffleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed([u8; 32]);

/// Errors returned when parsing a [`ShuffleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("seed contains a non-hex digit at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the first bad pair.
        offset: usize,
    },
}

impl ShuffleSeed {
    /// Draws a seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the PCG seed for a grid size, so one seed gives unrelated
    /// shuffles on different grids.
    pub(crate) fn rng_seed(self, size: GridSize) -> [u8; 16] {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update([u8::from(size)]);
        let digest = hasher.finalize();
        let mut seed = [0; 16];
        seed.copy_from_slice(&digest[..16]);
        seed
    }
}

impl fmt::Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let offset = i * 2;
            *byte = s
                .get(offset..offset + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or(ParseSeedError::InvalidDigit { offset })?;
        }
        Ok(Self(bytes))
    }
}
