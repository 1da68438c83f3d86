//! Fixed-length measurement bitstrings.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A fixed-length sequence of bits, one per qubit; bit `i` corresponds to
/// qubit `i`. Compared and hashed by content — candidates are generated and
/// discarded freely during search, there is no persistent identity.
///
/// The display form writes bit 0 leftmost, e.g. the 3-qubit string with
/// qubit 1 set renders as `"010"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// The all-zero bitstring of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Build from explicit bit values.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Build from a basis-state index, qubit 0 as the least significant bit.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds `usize::BITS` — the index form only exists
    /// for bitstrings that fit in one machine word.
    pub fn from_index(index: usize, len: usize) -> Self {
        assert!(
            len <= usize::BITS as usize,
            "bitstring of {len} bits has no usize index form"
        );
        let bits = (0..len).map(|i| (index >> i) & 1 == 1).collect();
        Self { bits }
    }

    /// Number of bits (= qubit count).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the bitstring is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn get(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Flip bit `i` in place.
    pub fn flip(&mut self, i: usize) {
        self.bits[i] = !self.bits[i];
    }

    /// Return a copy with bit `i` flipped (the single-bit-flip neighbor).
    #[must_use]
    pub fn with_flipped(&self, i: usize) -> Self {
        let mut next = self.clone();
        next.flip(i);
        next
    }

    /// Basis-state index of this bitstring, qubit 0 as least significant bit.
    ///
    /// # Panics
    ///
    /// Panics if the bitstring is longer than `usize::BITS` bits — the index
    /// form only exists for bitstrings that fit in one machine word.
    pub fn to_index(&self) -> usize {
        assert!(
            self.bits.len() <= usize::BITS as usize,
            "bitstring of {} bits has no usize index form",
            self.bits.len()
        );
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .fold(0usize, |acc, (i, _)| acc | (1 << i))
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Iterate over the bits, qubit 0 first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", u8::from(b))?;
        }
        Ok(())
    }
}

/// Error parsing a bitstring from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBitstringError(char);

impl fmt::Display for ParseBitstringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bitstring character '{}'", self.0)
    }
}

impl std::error::Error for ParseBitstringError {}

impl FromStr for Bitstring {
    type Err = ParseBitstringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(ParseBitstringError(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

// Serialized as the display string: `"0101"`. Keeps JSON results readable
// and round-trips through FromStr.
impl Serialize for Bitstring {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Bitstring {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BitstringVisitor;

        impl Visitor<'_> for BitstringVisitor {
            type Value = Bitstring;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string of '0' and '1' characters")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Bitstring, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(BitstringVisitor)
    }
}
