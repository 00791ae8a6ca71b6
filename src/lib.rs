//! Chainparams: network-specific consensus parameters for a proof-of-work node
//!
//! This crate provides:
//! - One immutable parameter set per network (Main, Testnet, Regtest, Unittest)
//! - Deterministic genesis block construction with self-verification
//! - Checkpoint tables that pin (height, hash) pairs
//! - Base58Check address prefixes and codec
//! - Fixed seed expansion for peer bootstrap
//! - An offline genesis nonce search
//!
//! # Example
//!
//! ```rust
//! use chainparams::params::{params, select_params, AddressClass, NetworkId};
//!
//! // Select the network once at startup
//! select_params(NetworkId::Testnet);
//!
//! // Read it anywhere
//! let params = params();
//! println!("Genesis: {}", params.genesis_block().hash());
//! assert_eq!(params.address_version(AddressClass::PubkeyHash), &[139]);
//!
//! // Reject blocks that contradict a checkpoint
//! let genesis = params.genesis_block().hash();
//! assert!(params.checkpoints().verify(0, &genesis));
//! ```

pub mod cli;
pub mod core;
pub mod crypto;
pub mod mining;
pub mod network;
pub mod params;

// Re-export commonly used types
pub use core::{Block, BlockHeader, Hash256, Transaction, U256};
pub use mining::{GenesisMiner, MiningStats};
pub use network::{SeedAddress, SeedSpec6};
pub use params::{
    params, select_params, try_params, ChainParams, CheckpointTable, NetworkId, ParameterRegistry,
    ParamsError,
};
