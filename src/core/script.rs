//! Script byte builder
//!
//! Only the pieces needed to assemble coinbase scripts: data pushes,
//! script numbers and single opcodes, serialized exactly as the consensus
//! encoding expects.

use serde::{Deserialize, Serialize};

// =============================================================================
// Opcodes
// =============================================================================

/// Push the next byte as data length
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Push the next two bytes (little-endian) as data length
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Push the next four bytes (little-endian) as data length
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Push the number -1
pub const OP_1NEGATE: u8 = 0x4f;
/// Push the number 1 (OP_2..OP_16 follow)
pub const OP_1: u8 = 0x51;
/// Push an empty vector
pub const OP_0: u8 = 0x00;
/// Check a signature against the preceding public key
pub const OP_CHECKSIG: u8 = 0xac;

// =============================================================================
// Script
// =============================================================================

/// A serialized script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(#[serde(with = "hex_bytes")] Vec<u8>);

impl Script {
    /// Empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an opcode
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Append a data push with the shortest length prefix
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Append an integer: small values become opcodes, anything else a
    /// minimally encoded script number push
    pub fn push_int(self, n: i64) -> Self {
        match n {
            -1 => self.push_opcode(OP_1NEGATE),
            0 => self.push_opcode(OP_0),
            1..=16 => self.push_opcode(OP_1 + (n as u8 - 1)),
            _ => {
                let encoded = script_num_bytes(n);
                self.push_slice(&encoded)
            }
        }
    }

    /// Raw script bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Script length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Little-endian sign-magnitude encoding used for script numbers
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign; add a byte if it is already taken
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_num_encoding() {
        assert_eq!(script_num_bytes(0), Vec::<u8>::new());
        assert_eq!(script_num_bytes(4), vec![0x04]);
        assert_eq!(script_num_bytes(127), vec![0x7f]);
        assert_eq!(script_num_bytes(128), vec![0x80, 0x00]);
        assert_eq!(script_num_bytes(-1), vec![0x81]);
        assert_eq!(script_num_bytes(-128), vec![0x80, 0x80]);
        assert_eq!(script_num_bytes(486_604_799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_int_small_values_are_opcodes() {
        assert_eq!(Script::new().push_int(0).as_bytes(), &[OP_0]);
        assert_eq!(Script::new().push_int(-1).as_bytes(), &[OP_1NEGATE]);
        assert_eq!(Script::new().push_int(16).as_bytes(), &[0x60]);
        assert_eq!(Script::new().push_int(17).as_bytes(), &[0x01, 0x11]);
    }

    #[test]
    fn test_push_slice_prefixes() {
        let short = Script::new().push_slice(&[0xaa; 75]);
        assert_eq!(short.as_bytes()[0], 75);
        assert_eq!(short.len(), 76);

        let medium = Script::new().push_slice(&[0xaa; 76]);
        assert_eq!(&medium.as_bytes()[..2], &[OP_PUSHDATA1, 76]);

        let long = Script::new().push_slice(&[0xaa; 300]);
        assert_eq!(&long.as_bytes()[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    }

    #[test]
    fn test_pay_to_pubkey_layout() {
        let pubkey = [0x04u8; 65];
        let script = Script::new().push_slice(&pubkey).push_opcode(OP_CHECKSIG);
        assert_eq!(script.len(), 67);
        assert_eq!(script.as_bytes()[0], 65);
        assert_eq!(*script.as_bytes().last().unwrap(), OP_CHECKSIG);
    }
}
