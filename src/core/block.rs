//! Block implementation
//!
//! A block contains an 80-byte header and a list of transactions. Headers
//! below [`ZEROCOIN_HEADER_VERSION`] hash with Quark, later ones with double
//! SHA-256.

use crate::core::transaction::Transaction;
use crate::core::uint::Hash256;
use crate::crypto::{calculate_merkle_root, hash256, quark_hash};
use serde::{Deserialize, Serialize};

// =============================================================================
// Block Constants
// =============================================================================

/// Block header size in bytes
pub const BLOCK_HEADER_SIZE: usize = 80;

/// First header version hashed with double SHA-256 instead of Quark
pub const ZEROCOIN_HEADER_VERSION: i32 = 4;

/// Block header containing metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block version
    pub version: i32,
    /// Hash of the previous block
    pub previous_hash: Hash256,
    /// Merkle root of all transactions
    pub merkle_root: Hash256,
    /// Block creation time (unix seconds)
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Nonce used for proof of work
    pub nonce: u32,
}

impl BlockHeader {
    /// Consensus serialization of the header
    pub fn serialize(&self) -> [u8; BLOCK_HEADER_SIZE] {
        let mut out = [0u8; BLOCK_HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.previous_hash.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Calculate the hash of the block header
    pub fn hash(&self) -> Hash256 {
        let data = self.serialize();
        if self.version < ZEROCOIN_HEADER_VERSION {
            quark_hash(&data)
        } else {
            hash256(&data)
        }
    }
}

/// A block in the blockchain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in the block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Assemble a block, filling in the merkle root from `transactions`
    pub fn new(
        version: i32,
        previous_hash: Hash256,
        time: u32,
        bits: u32,
        nonce: u32,
        transactions: Vec<Transaction>,
    ) -> Self {
        let merkle_root = Self::calculate_merkle_root(&transactions);
        Self {
            header: BlockHeader {
                version,
                previous_hash,
                merkle_root,
                time,
                bits,
                nonce,
            },
            transactions,
        }
    }

    /// Calculate the merkle root from transactions
    pub fn calculate_merkle_root(transactions: &[Transaction]) -> Hash256 {
        let tx_hashes: Vec<Hash256> = transactions.iter().map(Transaction::txid).collect();
        calculate_merkle_root(&tx_hashes)
    }

    /// Block hash (the header hash)
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Verify the block's merkle root
    pub fn verify_merkle_root(&self) -> bool {
        Self::calculate_merkle_root(&self.transactions) == self.header.merkle_root
    }

    /// Get the coinbase transaction (first transaction)
    pub fn coinbase_tx(&self) -> Option<&Transaction> {
        self.transactions.first().filter(|tx| tx.is_coinbase())
    }

    /// Get number of transactions in this block
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }
}
