//! Offline genesis nonce search
//!
//! Used when preparing a new network's genesis literals, never while
//! building parameters. Starting from the header's current nonce, the nonce
//! is incremented until the header hash is at or below the proof-of-work
//! limit.

use crate::core::{hash_meets_limit, BlockHeader, Hash256, U256};
use log::info;
use std::time::Instant;
use thiserror::Error;

/// Errors from the nonce search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MiningError {
    #[error("Nonce space exhausted after {0} attempts")]
    NonceSpaceExhausted(u64),
    #[error("No valid nonce within {0} attempts")]
    AttemptLimitReached(u64),
}

/// Mining statistics
#[derive(Debug, Clone)]
pub struct MiningStats {
    /// Number of hash attempts
    pub hash_attempts: u64,
    /// Time taken in milliseconds
    pub time_ms: u128,
    /// Hash rate (hashes per second)
    pub hash_rate: f64,
    /// Winning nonce
    pub nonce: u32,
    /// Resulting header hash
    pub hash: Hash256,
}

/// Brute-force nonce search against a proof-of-work limit
pub struct GenesisMiner {
    pow_limit: U256,
    max_attempts: Option<u64>,
}

impl GenesisMiner {
    pub fn new(pow_limit: U256) -> Self {
        Self {
            pow_limit,
            max_attempts: None,
        }
    }

    /// Give up after `attempts` hashes
    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Search from `header.nonce` upward, leaving the winning nonce in `header`
    pub fn mine(&self, header: &mut BlockHeader) -> Result<MiningStats, MiningError> {
        let start = Instant::now();
        let mut attempts: u64 = 0;

        info!(
            "Searching genesis nonce from {} (time {}, bits {:#010x})",
            header.nonce, header.time, header.bits
        );

        let hash = loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(MiningError::AttemptLimitReached(attempts));
            }

            let hash = header.hash();
            attempts += 1;
            if hash_meets_limit(&hash, &self.pow_limit) {
                break hash;
            }

            header.nonce = match header.nonce.checked_add(1) {
                Some(next) => next,
                None => return Err(MiningError::NonceSpaceExhausted(attempts)),
            };
        };

        let elapsed = start.elapsed().as_millis();
        let hash_rate = if elapsed > 0 {
            (attempts as f64) / (elapsed as f64 / 1000.0)
        } else {
            attempts as f64
        };

        info!(
            "Genesis nonce {} found in {}ms ({} attempts, {:.2} H/s): {}",
            header.nonce, elapsed, attempts, hash_rate, hash
        );

        Ok(MiningStats {
            hash_attempts: attempts,
            time_ms: elapsed,
            hash_rate,
            nonce: header.nonce,
            hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{registry, NetworkId};

    #[test]
    fn test_genesis_nonce_is_found_immediately() {
        let regtest = registry().get(NetworkId::Regtest);
        let mut header = regtest.genesis_block().header.clone();

        let stats = GenesisMiner::new(regtest.consensus.pow_limit)
            .mine(&mut header)
            .unwrap();

        assert_eq!(stats.nonce, 732_084);
        assert_eq!(stats.hash, regtest.genesis_block().hash());
        assert_eq!(stats.hash_attempts, 1);
    }

    #[test]
    fn test_skips_hashes_above_limit() {
        let regtest = registry().get(NetworkId::Regtest);
        let mut header = regtest.genesis_block().header.clone();
        header.nonce = 732_081;

        let stats = GenesisMiner::new(regtest.consensus.pow_limit)
            .mine(&mut header)
            .unwrap();

        // 732_081 and 732_082 hash above 2^255
        assert_eq!(stats.nonce, 732_083);
        assert_eq!(header.nonce, 732_083);
        assert_eq!(stats.hash_attempts, 3);
        assert_eq!(stats.hash, header.hash());
        assert_eq!(
            stats.hash.to_hex(),
            "73d02e1d2deceb16b0bccc66be0f4407181aaa972dca6699de2fb56a8bbc5bb1"
        );
    }

    #[test]
    fn test_attempt_cap() {
        let main = registry().get(NetworkId::Main);
        let mut header = main.genesis_block().header.clone();
        header.nonce = 0;

        let result = GenesisMiner::new(main.consensus.pow_limit)
            .with_max_attempts(1)
            .mine(&mut header);
        assert_eq!(result.unwrap_err(), MiningError::AttemptLimitReached(1));
    }

    #[test]
    fn test_nonce_space_exhausted() {
        let main = registry().get(NetworkId::Main);
        let mut header = main.genesis_block().header.clone();
        header.nonce = u32::MAX - 2;

        // Zero limit: no hash can satisfy it
        let result = GenesisMiner::new(U256::zero()).mine(&mut header);
        assert_eq!(result.unwrap_err(), MiningError::NonceSpaceExhausted(3));
    }
}
