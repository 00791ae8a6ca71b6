//! Checkpoint System
//!
//! Hardcoded (height, hash) pins that reject incompatible alternate
//! histories regardless of their proof of work, plus the sync-pacing data
//! used to estimate verification progress.

use crate::core::{Hash256, HashParseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Seconds per day, for the transactions-per-day estimate
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Blocks past the last checkpoint cost this much more to verify
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

// =============================================================================
// Errors
// =============================================================================

/// Checkpoint validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckpointError {
    #[error("Checkpoint mismatch at height {height}: expected {expected}, got {got}")]
    Mismatch {
        height: u32,
        expected: Hash256,
        got: Hash256,
    },
    #[error("Duplicate checkpoint at height {0}")]
    DuplicateHeight(u32),
    #[error("Invalid checkpoint hash at height {0}: {1}")]
    InvalidHash(u32, HashParseError),
}

// =============================================================================
// Checkpoint Data
// =============================================================================

/// Sync-pacing metadata recorded alongside the pins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckpointData {
    /// Unix timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

/// Result of checkpoint verification
#[derive(Debug, Clone, PartialEq)]
pub enum CheckpointResult {
    /// Block matches the checkpoint
    Match,
    /// Block doesn't match the checkpoint
    Mismatch { expected: Hash256, got: Hash256 },
    /// No checkpoint at this height
    NoCheckpoint,
}

impl CheckpointResult {
    pub fn is_valid(&self) -> bool {
        matches!(
            self,
            CheckpointResult::Match | CheckpointResult::NoCheckpoint
        )
    }
}

// =============================================================================
// Checkpoint Table
// =============================================================================

/// Ordered height → hash pins for one network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointTable {
    checkpoints: BTreeMap<u32, Hash256>,
    data: CheckpointData,
}

impl CheckpointTable {
    /// Build a table from already-parsed pins
    pub fn new(
        pins: impl IntoIterator<Item = (u32, Hash256)>,
        data: CheckpointData,
    ) -> Result<Self, CheckpointError> {
        let mut checkpoints = BTreeMap::new();
        for (height, hash) in pins {
            if checkpoints.insert(height, hash).is_some() {
                return Err(CheckpointError::DuplicateHeight(height));
            }
        }
        Ok(Self { checkpoints, data })
    }

    /// Build a table from hex literals
    pub fn from_literals(
        pins: &[(u32, &str)],
        data: CheckpointData,
    ) -> Result<Self, CheckpointError> {
        let parsed = pins
            .iter()
            .map(|(height, literal)| {
                Hash256::from_hex(literal)
                    .map(|hash| (*height, hash))
                    .map_err(|e| CheckpointError::InvalidHash(*height, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed, data)
    }

    /// Check a candidate block against the pin at its height
    pub fn check(&self, height: u32, hash: &Hash256) -> CheckpointResult {
        match self.checkpoints.get(&height) {
            Some(expected) if expected == hash => CheckpointResult::Match,
            Some(expected) => CheckpointResult::Mismatch {
                expected: *expected,
                got: *hash,
            },
            None => CheckpointResult::NoCheckpoint,
        }
    }

    /// Whether a block at `height` with `hash` is acceptable.
    ///
    /// Heights without a pin are unconstrained.
    pub fn verify(&self, height: u32, hash: &Hash256) -> bool {
        self.check(height, hash).is_valid()
    }

    /// Like [`verify`](Self::verify) but returns the mismatch as an error
    pub fn enforce(&self, height: u32, hash: &Hash256) -> Result<(), CheckpointError> {
        match self.check(height, hash) {
            CheckpointResult::Mismatch { expected, got } => {
                log::warn!(
                    "Rejecting block at height {}: checkpoint expects {}, got {}",
                    height,
                    expected,
                    got
                );
                Err(CheckpointError::Mismatch {
                    height,
                    expected,
                    got,
                })
            }
            _ => Ok(()),
        }
    }

    /// Get checkpoint hash at height
    pub fn get(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// Height of the highest checkpoint (0 when empty)
    pub fn total_blocks_estimate(&self) -> u32 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// Highest checkpoint at or below `height`
    pub fn last_checkpoint(&self, height: u32) -> Option<(u32, &Hash256)> {
        self.checkpoints
            .range(..=height)
            .next_back()
            .map(|(h, hash)| (*h, hash))
    }

    /// Sync-pacing metadata
    pub fn data(&self) -> &CheckpointData {
        &self.data
    }

    /// All pins in ascending height order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash256)> {
        self.checkpoints.iter().map(|(h, hash)| (*h, hash))
    }

    /// Get checkpoint count
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if no checkpoints
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Rough fraction of total verification work done, in `[0, 1]`.
    ///
    /// `chain_tx` is the cumulative transaction count at the tip and
    /// `tip_time` its block time. Advisory only.
    pub fn guess_verification_progress(&self, chain_tx: u64, tip_time: i64, now: i64) -> f64 {
        let data = &self.data;
        let (work_before, work_after) = if chain_tx <= data.transactions_last_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (data.transactions_last_checkpoint - chain_tx) as f64;
            let expensive_after = elapsed_days(data.last_checkpoint_time, now) * data.transactions_per_day;
            (
                cheap_before,
                cheap_after + expensive_after * SIGCHECK_VERIFICATION_FACTOR,
            )
        } else {
            let cheap_before = data.transactions_last_checkpoint as f64;
            let expensive_before = (chain_tx - data.transactions_last_checkpoint) as f64;
            let expensive_after = elapsed_days(tip_time, now) * data.transactions_per_day;
            (
                cheap_before + expensive_before * SIGCHECK_VERIFICATION_FACTOR,
                expensive_after * SIGCHECK_VERIFICATION_FACTOR,
            )
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}

fn elapsed_days(from: i64, now: i64) -> f64 {
    (now - from).max(0) as f64 / SECONDS_PER_DAY
}

// =============================================================================
// Tests
// =============================================================================
