//! Transaction value type
//!
//! Only what the genesis block needs: a version-1 transaction with
//! inputs, outputs and the consensus serialization its ID is hashed from.

use crate::core::script::{Script, OP_CHECKSIG};
use crate::core::Hash256;
use crate::crypto::hash256;
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Monetary amount in base units
pub type Amount = i64;

/// Base units per coin
pub const COIN: Amount = 100_000_000;

/// Hundredth of a coin, the unit zerocoin mint fees are quoted in
pub const ZCENT: Amount = 1_000_000;

/// Transaction version used by the genesis coinbase
pub const TX_VERSION: i32 = 1;

/// Sequence number that disables locktime
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// Output index of a null (coinbase) outpoint
pub const NULL_INDEX: u32 = 0xFFFF_FFFF;

// =============================================================================
// Inputs and Outputs
// =============================================================================

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash256,
    pub index: u32,
}

impl OutPoint {
    /// The outpoint a coinbase input spends
    pub fn null() -> Self {
        Self {
            hash: Hash256::ZERO,
            index: NULL_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.hash.is_zero() && self.index == NULL_INDEX
    }
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Script,
}

// =============================================================================
// Transaction
// =============================================================================

/// A transaction in consensus form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Build a genesis-style coinbase.
    ///
    /// The single input carries `486604799`, the script number `4` and the
    /// timestamp message; the single output pays `reward` to `pubkey` with a
    /// pay-to-pubkey script.
    pub fn genesis_coinbase(message: &[u8], reward: Amount, pubkey: &[u8]) -> Self {
        let script_sig = Script::new()
            .push_int(486_604_799)
            .push_slice(&[4])
            .push_slice(message);
        let script_pubkey = Script::new().push_slice(pubkey).push_opcode(OP_CHECKSIG);

        Self {
            version: TX_VERSION,
            inputs: vec![TxIn {
                prevout: OutPoint::null(),
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TxOut {
                value: reward,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    /// Whether this is a coinbase (single input spending the null outpoint)
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Consensus serialization
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(256);
        out.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut out, self.inputs.len() as u64);
        for input in &self.inputs {
            out.extend_from_slice(input.prevout.hash.as_bytes());
            out.extend_from_slice(&input.prevout.index.to_le_bytes());
            write_compact_size(&mut out, input.script_sig.len() as u64);
            out.extend_from_slice(input.script_sig.as_bytes());
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut out, self.outputs.len() as u64);
        for output in &self.outputs {
            out.extend_from_slice(&output.value.to_le_bytes());
            write_compact_size(&mut out, output.script_pubkey.len() as u64);
            out.extend_from_slice(output.script_pubkey.as_bytes());
        }

        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    /// Transaction ID: double SHA-256 of the serialization
    pub fn txid(&self) -> Hash256 {
        hash256(&self.serialize())
    }

    /// Sum of all output values
    pub fn total_output(&self) -> Amount {
        self.outputs.iter().map(|o| o.value).sum()
    }
}

/// Variable-length integer prefix used for counts and script lengths
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= 0xffff {
        out.push(0xfd);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        out.push(0xfe);
        out.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coinbase_shape() {
        let tx = Transaction::genesis_coinbase(b"hello", 50 * COIN, &[0x02; 33]);
        assert!(tx.is_coinbase());
        assert_eq!(tx.total_output(), 50 * COIN);
        assert_eq!(tx.inputs[0].sequence, SEQUENCE_FINAL);
        // 04 ffff001d | 01 04 | 05 "hello"
        assert_eq!(
            tx.inputs[0].script_sig.as_bytes(),
            &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x05, b'h', b'e', b'l', b'l', b'o']
        );
    }

    #[test]
    fn test_serialization_layout() {
        let tx = Transaction::genesis_coinbase(b"m", COIN, &[0x03; 33]);
        let bytes = tx.serialize();

        assert_eq!(&bytes[..4], &1i32.to_le_bytes());
        assert_eq!(bytes[4], 1); // one input
        assert!(bytes[5..37].iter().all(|b| *b == 0));
        assert_eq!(&bytes[37..41], &[0xff; 4]);
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 0]);

        // version + vin + outpoint + script + seq + vout + value + script + locktime
        let script_sig_len = tx.inputs[0].script_sig.len();
        let script_pubkey_len = tx.outputs[0].script_pubkey.len();
        let expected = 4 + 1 + 36 + 1 + script_sig_len + 4 + 1 + 8 + 1 + script_pubkey_len + 4;
        assert_eq!(bytes.len(), expected);
    }

    #[test]
    fn test_compact_size() {
        let mut out = Vec::new();
        write_compact_size(&mut out, 0xfc);
        write_compact_size(&mut out, 0xfd);
        write_compact_size(&mut out, 0x1_0000);
        assert_eq!(out, vec![0xfc, 0xfd, 0xfd, 0x00, 0xfe, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn test_txid_changes_with_output() {
        let a = Transaction::genesis_coinbase(b"m", COIN, &[0x03; 33]);
        let b = Transaction::genesis_coinbase(b"m", 2 * COIN, &[0x03; 33]);
        assert_ne!(a.txid(), b.txid());
    }
}
