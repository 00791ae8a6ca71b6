//! Genesis block construction
//!
//! Every network hard-codes the fields of its first block together with the
//! hash and merkle root that block must produce. Building a parameter set
//! rebuilds the block from those fields and refuses to continue if either
//! digest differs from the stored literal.

use crate::core::{Amount, Block, Hash256, Transaction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Genesis verification errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenesisError {
    #[error("Genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { expected: Hash256, computed: Hash256 },

    #[error("Genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch { expected: Hash256, computed: Hash256 },

    #[error("Invalid genesis output public key: {0}")]
    InvalidOutputKey(#[from] hex::FromHexError),
}

// =============================================================================
// Genesis Spec
// =============================================================================

/// Inputs to the genesis block plus the digests it must reproduce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisSpec {
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Timestamp message embedded in the coinbase input
    pub message: String,
    pub reward: Amount,
    /// Hex-encoded public key the coinbase output pays to
    pub output_pubkey: String,
    pub expected_hash: Hash256,
    pub expected_merkle_root: Hash256,
}

impl GenesisSpec {
    /// Assemble the genesis block from the spec's fields.
    ///
    /// Does not compare against the expected digests; see [`verify`](Self::verify).
    pub fn build(&self) -> Result<Block, GenesisError> {
        let pubkey = hex::decode(&self.output_pubkey)?;
        let coinbase = Transaction::genesis_coinbase(self.message.as_bytes(), self.reward, &pubkey);

        Ok(Block::new(
            self.version,
            Hash256::ZERO,
            self.time,
            self.bits,
            self.nonce,
            vec![coinbase],
        ))
    }

    /// Check a built block against the expected digests
    pub fn verify(&self, block: &Block) -> Result<(), GenesisError> {
        let merkle_root = block.header.merkle_root;
        if merkle_root != self.expected_merkle_root {
            return Err(GenesisError::MerkleRootMismatch {
                expected: self.expected_merkle_root,
                computed: merkle_root,
            });
        }

        let hash = block.hash();
        if hash != self.expected_hash {
            return Err(GenesisError::HashMismatch {
                expected: self.expected_hash,
                computed: hash,
            });
        }

        Ok(())
    }

    /// Build and verify in one step
    pub fn build_verified(&self) -> Result<Block, GenesisError> {
        let block = self.build()?;
        self.verify(&block)?;
        log::debug!("Genesis block {} verified", self.expected_hash);
        Ok(block)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{hash_meets_limit, U256, COIN};

    const MERKLE_ROOT: &str = "69ce58136f49e4b752e4a9d932dca99dea3d0e6847f6e685bf595c7709623dca";

    fn regtest_spec() -> GenesisSpec {
        GenesisSpec {
            version: 1,
            time: 1_515_524_400,
            bits: 0x1e0f_fff0,
            nonce: 732_084,
            message: "BitMoney V2 Phoenix is Born - Jacob is Gone".to_string(),
            reward: COIN,
            output_pubkey: "0408287b53c96f466269c6b9f759d1d108f86eabff18afc539e22a2a3b77b5ba90229662fe6cd0d4e79b29bb64b8b0fd7b0635e4df767551e990c4915f5cf7387a".to_string(),
            expected_hash: Hash256::from_hex(
                "5f03bd649d4bd24d92be04cf20747d51f7d2acbecd57090f15639f5c1ab1a572",
            )
            .unwrap(),
            expected_merkle_root: Hash256::from_hex(MERKLE_ROOT).unwrap(),
        }
    }

    #[test]
    fn test_build_reproduces_literals() {
        let spec = regtest_spec();
        let block = spec.build_verified().unwrap();

        assert_eq!(block.header.previous_hash, Hash256::ZERO);
        assert_eq!(block.tx_count(), 1);
        assert!(block.coinbase_tx().is_some());
        assert_eq!(block.header.merkle_root.to_hex(), MERKLE_ROOT);
        assert!(hash_meets_limit(&block.hash(), &(U256::MAX >> 1usize)));
    }

    #[test]
    fn test_build_is_deterministic() {
        let spec = regtest_spec();
        assert_eq!(spec.build().unwrap(), spec.build().unwrap());
    }

    #[test]
    fn test_wrong_nonce_is_hash_mismatch() {
        let mut spec = regtest_spec();
        spec.nonce = 2;
        assert!(matches!(
            spec.build_verified(),
            Err(GenesisError::HashMismatch { .. })
        ));
    }

    #[test]
    fn test_wrong_message_is_merkle_mismatch() {
        let mut spec = regtest_spec();
        spec.message.push('!');
        assert!(matches!(
            spec.build_verified(),
            Err(GenesisError::MerkleRootMismatch { .. })
        ));
    }

    #[test]
    fn test_bad_output_key() {
        let mut spec = regtest_spec();
        spec.output_pubkey = "not hex".to_string();
        assert!(matches!(spec.build(), Err(GenesisError::InvalidOutputKey(_))));
    }
}
