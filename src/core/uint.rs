//! 256-bit integers and hashes
//!
//! `U256` carries proof-of-work limits and targets; `Hash256` carries block
//! and transaction hashes in internal (little-endian) byte order and prints
//! them reversed, the way block explorers show them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uint::construct_uint;

construct_uint! {
    /// Unsigned 256-bit integer made of 4 x 64-bit words
    pub struct U256(4);
}

/// Errors parsing hex hash literals
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HashParseError {
    #[error("Hash literal too long: {0} hex digits (max: 64)")]
    TooLong(usize),
    #[error("Empty hash literal")]
    Empty,
    #[error("Invalid hex in hash literal: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 32-byte hash stored in internal byte order
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The all-zero hash (previous hash of a genesis block)
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    /// Wrap raw bytes in internal order
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Wrap a digest slice; `None` unless it is exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(arr))
    }

    /// Parse a display-order hex literal.
    ///
    /// Accepts an optional `0x` prefix and short literals (left-padded with
    /// zeros), matching how uint256 constants are written in chain tables.
    pub fn from_hex(literal: &str) -> Result<Self, HashParseError> {
        let mut digits = literal.trim();
        if let Some(stripped) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            digits = stripped;
        }
        if digits.is_empty() {
            return Err(HashParseError::Empty);
        }
        if digits.len() > 64 {
            return Err(HashParseError::TooLong(digits.len()));
        }

        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)?;
        bytes.reverse();
        Ok(Self(bytes))
    }

    /// Display-order hex string
    pub fn to_hex(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }

    /// Raw bytes in internal order
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Interpret the hash as an unsigned little-endian integer
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }

    /// Whether every byte is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl FromStr for Hash256 {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Serialize a `U256` as a 64-digit hex string
pub fn serialize_u256_hex<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&u256_to_hex(value))
}

/// Big-endian, zero-padded hex rendering of a `U256`
pub fn u256_to_hex(value: &U256) -> String {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    hex::encode(bytes)
}

/// Decode a compact difficulty ("nBits") into the full target.
///
/// Returns `None` for negative or overflowing encodings.
pub fn target_from_compact(bits: u32) -> Option<U256> {
    let exponent = (bits >> 24) as usize;
    let mantissa = bits & 0x007f_ffff;
    let negative = bits & 0x0080_0000 != 0;

    if mantissa == 0 {
        return Some(U256::zero());
    }
    if negative {
        return None;
    }

    if exponent <= 3 {
        return Some(U256::from(mantissa >> (8 * (3 - exponent))));
    }

    let shift = 8 * (exponent - 3);
    let significant_bits = 32 - mantissa.leading_zeros() as usize;
    if shift + significant_bits > 256 {
        return None;
    }
    Some(U256::from(mantissa) << shift)
}

/// Whether `hash`, read as a little-endian integer, is at or below `limit`
pub fn hash_meets_limit(hash: &Hash256, limit: &U256) -> bool {
    hash.to_u256() <= *limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_roundtrip_keeps_display_order() {
        let literal = "000006889bd568a836dd1a31a3f93949eaa24368f6dd98dc31edd44375578c2f";
        let hash = Hash256::from_hex(literal).unwrap();
        assert_eq!(hash.to_hex(), literal);
        // internal order is reversed
        assert_eq!(hash.0[0], 0x2f);
        assert_eq!(hash.0[31], 0x00);
    }

    #[test]
    fn test_short_literal_is_left_padded() {
        let hash = Hash256::from_hex("0x001").unwrap();
        assert_eq!(hash.0[0], 0x01);
        assert!(hash.0[1..].iter().all(|b| *b == 0));
        assert_eq!(hash.to_u256(), U256::from(1u64));
    }

    #[test]
    fn test_bad_literals() {
        assert_eq!(Hash256::from_hex(""), Err(HashParseError::Empty));
        assert!(matches!(
            Hash256::from_hex(&"f".repeat(65)),
            Err(HashParseError::TooLong(65))
        ));
        assert!(matches!(
            Hash256::from_hex("zz"),
            Err(HashParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_compact_target() {
        // 0x1e0ffff0 -> 0x0ffff0 * 256^27
        let target = target_from_compact(0x1e0f_fff0).unwrap();
        assert_eq!(target, U256::from(0x0f_fff0u64) << 216usize);

        assert_eq!(target_from_compact(0x0300_1234).unwrap(), U256::from(0x1234u64));
        assert_eq!(target_from_compact(0).unwrap(), U256::zero());
        assert!(target_from_compact(0x0480_0001).is_none());
        assert!(target_from_compact(0xff7f_ffff).is_none());
    }

    #[test]
    fn test_hash_meets_limit() {
        let limit = U256::MAX >> 20usize;
        let easy = Hash256::from_hex("000006889bd568a836dd1a31a3f93949eaa24368f6dd98dc31edd44375578c2f").unwrap();
        let hard = Hash256::from_hex("271297241601142e77db02500b29bf931ade656318a97b5df4a71eced774fc09").unwrap();
        assert!(hash_meets_limit(&easy, &limit));
        assert!(!hash_meets_limit(&hard, &limit));
    }
}
