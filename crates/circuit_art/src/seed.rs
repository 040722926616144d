//! Seed values: parsing, synthesis, and the shareable fragment form.
use std::fmt;

use rand::RngExt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::rng::SineRng;

/// Number of decimal digits in a synthesised seed.
pub const SEED_DIGITS: usize = 12;

/// A generation seed together with the text it was read from.
///
/// Parsing follows decimal `parseInt`: leading whitespace is skipped, an optional `+`
/// is accepted, and the longest run of ASCII digits is used while trailing characters
/// are ignored. Input without leading digits, negative input, and values beyond `u64`
/// are rejected so the RNG never sees a non-finite state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed {
    value: u64,
    text: String,
}

impl Seed {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits_len = unsigned
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return Err(Error::InvalidSeed {
                input: input.to_owned(),
            });
        }

        let digits = &unsigned[..digits_len];
        let value = digits.parse::<u64>().map_err(|_| Error::InvalidSeed {
            input: input.to_owned(),
        })?;

        Ok(Self {
            value,
            text: digits.to_owned(),
        })
    }

    /// Parse `input`, or synthesise a fresh seed when it is unusable.
    pub fn parse_or_random(input: &str) -> Self {
        match Self::parse(input) {
            Ok(seed) => seed,
            Err(err) => {
                debug!("{err}; synthesising a fresh seed");
                Self::random()
            }
        }
    }

    /// Synthesise a [`SEED_DIGITS`]-digit seed from the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Synthesise a [`SEED_DIGITS`]-digit seed from the given RNG.
    pub fn random_with<R: RngExt + ?Sized>(rng: &mut R) -> Self {
        let text: String = (0..SEED_DIGITS)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect();
        // Leading zeros are kept in the text but not in the value.
        let value = text.bytes().fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
        Self { value, text }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fragment identifier for shareable locations, e.g. `#123456789012`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.text)
    }

    /// Fresh RNG positioned at the start of this seed's stream.
    pub fn rng(&self) -> SineRng {
        SineRng::new(self.value as f64)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl std::str::FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
