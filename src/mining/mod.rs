//! Offline mining tools

pub mod genesis_miner;

pub use genesis_miner::{GenesisMiner, MiningError, MiningStats};
