use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed for reproducible deal generation.
///
/// Seeds render as 64 lowercase hex digits and parse from the same format.
///
/// # Examples
///
/// ```
/// use twentyfour_generator::DealSeed;
///
/// let seed = DealSeed::from_phrase("hello");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<DealSeed>()?, seed);
/// # Ok::<(), twentyfour_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealSeed([u8; 32]);

impl DealSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from arbitrary text using SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns a random number generator seeded with this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for DealSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`DealSeed`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input was not 64 characters long.
    #[display("expected 64 hex digits, found {found} characters")]
    WrongLength {
        /// Number of characters in the input.
        found: usize,
    },
    /// The input contained a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} at position {position}")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
        /// Zero-based character position.
        position: usize,
    },
}

impl FromStr for DealSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let found = s.chars().count();
        if found != 64 {
            return Err(ParseSeedError::WrongLength { found });
        }

        let mut nibbles = [0u8; 64];
        for (position, (nibble, ch)) in nibbles.iter_mut().zip(s.chars()).enumerate() {
            *nibble = ch
                .to_digit(16)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(ParseSeedError::InvalidHexDigit { ch, position })?;
        }

        let mut bytes = [0u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
