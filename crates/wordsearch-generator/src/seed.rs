//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use rand::prelude::*;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// The same seed with the same inputs always produces the same grid and the
/// same placements. Seeds are written as 64 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("hello");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>()?, seed);
/// assert_ne!(seed.derive(0), seed.derive(1));
/// # Ok::<(), wordsearch_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Hashes a phrase into a seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Derives an independent seed for the `index`-th attempt.
    #[must_use]
    pub fn derive(&self, index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(index.to_le_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let digit = |ch: char| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(SeedParseError::InvalidDigit { ch })
        };
        let mut bytes = [0; 32];
        let chars: Vec<char> = s.chars().collect();
        for (byte, pair) in bytes.iter_mut().zip(chars.chunks_exact(2)) {
            *byte = (digit(pair[0])? << 4) | digit(pair[1])?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(HEX.to_uppercase().parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}zz", &HEX[..62]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit { ch: 'z' })
        );
    }

    #[test]
    fn test_phrase_is_sha256() {
        // SHA-256("abc")
        assert_eq!(
            PuzzleSeed::from_phrase("abc").to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_derive_is_stable() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.derive(3), seed.derive(3));
        assert_ne!(seed.derive(3), seed);
        assert_ne!(seed.derive(3), seed.derive(4));
    }

    #[test]
    fn test_rng_is_deterministic() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        let a: Vec<u32> = (0..4).map(|_| seed.rng().random()).collect();
        let mut rng = seed.rng();
        let b: u32 = rng.random();
        assert_eq!(a[0], b);
        assert!(a.iter().all(|&x| x == b));
    }
}
