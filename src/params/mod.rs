//! Network parameters
//!
//! One immutable [`ChainParams`] per network, built once by the
//! [`ParameterRegistry`] and selected at process start:
//! - Genesis block construction and self-verification
//! - Checkpoint tables
//! - Address version prefixes
//! - Consensus, activation, zerocoin and masternode constants
//! - Policy flags and seed lists

pub mod address;
pub mod chain;
pub mod checkpoints;
pub mod genesis;
pub mod network_id;
pub mod networks;
pub mod overrides;
pub mod registry;
pub mod unittest;

pub use address::{AddressClass, AddressVersionTable};
pub use chain::{
    ActivationHeights, ChainParams, ConsensusParams, MasternodeParams, PolicyFlags,
    ZerocoinParams, NEVER,
};
pub use checkpoints::{CheckpointData, CheckpointError, CheckpointResult, CheckpointTable};
pub use genesis::{GenesisError, GenesisSpec};
pub use network_id::NetworkId;
pub use overrides::{derive_from, ParamOverride};
pub use registry::{
    params, params_for, registry, select_params, try_params, ParameterRegistry, Selection,
};
pub use unittest::UnitTestParams;

use crate::core::HashParseError;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while building or selecting network parameters
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Unimplemented network: {0}")]
    UnimplementedNetwork(String),

    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworkFlags,

    #[error("No network has been selected")]
    NetworkNotSelected,

    #[error("Genesis error on {network}: {source}")]
    Genesis {
        network: NetworkId,
        #[source]
        source: GenesisError,
    },

    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    #[error("{network}: checkpoint at height 0 is {checkpoint}, genesis is {genesis}")]
    CheckpointGenesisMismatch {
        network: NetworkId,
        checkpoint: String,
        genesis: String,
    },

    #[error("{network}: missing checkpoint at height 0")]
    MissingGenesisCheckpoint { network: NetworkId },

    #[error("{network}: address prefixes for {first} and {second} collide")]
    DuplicateAddressPrefix {
        network: NetworkId,
        first: AddressClass,
        second: AddressClass,
    },

    #[error("{first} and {second} share message start {magic}")]
    DuplicateMagic {
        first: NetworkId,
        second: NetworkId,
        magic: String,
    },

    #[error("{network}: invalid hex in {field}: {source}")]
    InvalidHex {
        network: NetworkId,
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Invalid hash literal: {0}")]
    InvalidHash(#[from] HashParseError),
}
