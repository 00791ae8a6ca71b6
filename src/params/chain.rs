//! Network parameter set
//!
//! [`ChainParams`] groups everything that differs between networks. Values
//! are plain data; the only logic here is sealing, which rebuilds the
//! genesis block and checks the set's internal consistency before anyone
//! can read it.

use super::address::{AddressClass, AddressVersionTable};
use super::checkpoints::CheckpointTable;
use super::genesis::GenesisSpec;
use super::network_id::NetworkId;
use super::ParamsError;
use crate::core::{serialize_u256_hex, Amount, Block, U256};
use crate::network::seeds::{expand_fixed_seeds, DnsSeed, SeedAddress, SeedSpec6};
use chrono::Utc;
use rand::rngs::OsRng;
use serde::Serialize;

/// Activation height meaning "never activates"
pub const NEVER: i32 = !1;

// =============================================================================
// Sub-structures
// =============================================================================

/// Difficulty, timing and supply rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsensusParams {
    /// Easiest target a block hash may satisfy
    #[serde(serialize_with = "serialize_u256_hex")]
    pub pow_limit: U256,
    pub subsidy_halving_interval: u32,
    pub max_reorganization_depth: u32,
    /// Upgraded blocks required to enforce a new version
    pub enforce_block_upgrade_majority: u32,
    /// Upgraded blocks required to reject outdated versions
    pub reject_block_outdated_majority: u32,
    /// Window the two majorities are counted over
    pub to_check_block_upgrade_majority: u32,
    /// Default miner thread count (0 = one per core)
    pub miner_threads: u32,
    /// Retarget timespan in seconds
    pub target_timespan: i64,
    /// Target block spacing in seconds
    pub target_spacing: i64,
    /// Spacing used during the slow launch period
    pub target_spacing_slow_launch: i64,
    pub coinbase_maturity: u32,
    pub masternode_count_drift: u32,
    pub max_money_out: Amount,
}

/// Heights and times at which rule changes take effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationHeights {
    pub last_pow_block: i32,
    pub modifier_update_block: i32,
    pub zerocoin_start_height: i32,
    /// Unix time
    pub zerocoin_start_time: i64,
    pub zerocoin_accumulator_start_height: i32,
    pub enforce_serial_range: i32,
    pub recalculate_accumulators: i32,
    pub first_fraudulent_block: i32,
    pub last_good_checkpoint: i32,
}

impl ActivationHeights {
    /// Whether a height-gated rule is active at `height`
    pub fn is_active(activation: i32, height: i32) -> bool {
        activation != NEVER && activation >= 0 && height >= activation
    }
}

/// Zerocoin protocol constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZerocoinParams {
    /// Trusted RSA modulus as a hex literal
    pub modulus: String,
    pub max_spends_per_transaction: u32,
    pub min_mint_fee: Amount,
    pub mint_required_confirmations: u32,
    pub required_accumulation: u32,
    pub default_security_level: u32,
    /// Block header version once zerocoin is active
    pub header_version: i32,
}

impl ZerocoinParams {
    /// Modulus width in bits
    pub fn modulus_bits(&self) -> Result<usize, hex::FromHexError> {
        let bytes = hex::decode(&self.modulus)?;
        let leading = bytes.iter().take_while(|b| **b == 0).count();
        match bytes.get(leading) {
            Some(first) => Ok((bytes.len() - leading) * 8 - first.leading_zeros() as usize),
            None => Ok(0),
        }
    }
}

/// Masternode, spork and budget constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasternodeParams {
    /// Hex-encoded key that signs spork messages
    pub spork_pubkey: String,
    pub obfuscation_pool_dummy_address: String,
    /// Unix time masternode payments start
    pub start_masternode_payments: i64,
    pub pool_max_transactions: u32,
    pub budget_fee_confirmations: u32,
}

/// Node policy switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyFlags {
    pub require_rpc_password: bool,
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    /// Report the deprecated `testnet` field over RPC
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

// =============================================================================
// Chain Params
// =============================================================================

/// Every network-specific constant a node needs.
///
/// Fields are read through accessors. Only sealing produces a set, so the
/// cached genesis block always matches `genesis`.
///
/// ```compile_fail
/// use chainparams::params::{registry, NetworkId};
///
/// let mut params = registry().get(NetworkId::Main).clone();
/// params.genesis.nonce += 1;
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ChainParams {
    pub(crate) network: NetworkId,
    /// Four bytes prefixing every p2p message
    pub(crate) message_start: [u8; 4],
    /// Hex-encoded alert signing key
    pub(crate) alert_pubkey: String,
    pub(crate) default_port: u16,

    pub(crate) consensus: ConsensusParams,
    pub(crate) activation: ActivationHeights,
    pub(crate) zerocoin: ZerocoinParams,
    pub(crate) masternode: MasternodeParams,

    pub(crate) genesis: GenesisSpec,
    pub(crate) checkpoints: CheckpointTable,

    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) fixed_seeds: Vec<SeedSpec6>,
    pub(crate) base58: AddressVersionTable,
    pub(crate) policy: PolicyFlags,

    /// Filled in by [`seal`](Self::seal)
    #[serde(skip)]
    genesis_block: Block,
}

impl ChainParams {
    /// Assemble and seal a parameter set
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        network: NetworkId,
        message_start: [u8; 4],
        alert_pubkey: &str,
        default_port: u16,
        consensus: ConsensusParams,
        activation: ActivationHeights,
        zerocoin: ZerocoinParams,
        masternode: MasternodeParams,
        genesis: GenesisSpec,
        checkpoints: CheckpointTable,
        dns_seeds: Vec<DnsSeed>,
        fixed_seeds: Vec<SeedSpec6>,
        base58: AddressVersionTable,
        policy: PolicyFlags,
    ) -> Result<Self, ParamsError> {
        let params = Self {
            network,
            message_start,
            alert_pubkey: alert_pubkey.to_string(),
            default_port,
            consensus,
            activation,
            zerocoin,
            masternode,
            genesis,
            checkpoints,
            dns_seeds,
            fixed_seeds,
            base58,
            policy,
            genesis_block: Block::default(),
        };
        params.seal()
    }

    /// Build the genesis block and check every invariant.
    ///
    /// The only place a genesis block is built for a set.
    pub(crate) fn seal(mut self) -> Result<Self, ParamsError> {
        let network = self.network;

        self.genesis_block = self
            .genesis
            .build_verified()
            .map_err(|source| ParamsError::Genesis { network, source })?;

        let genesis_hash = self.genesis_block.hash();
        match self.checkpoints.get(0) {
            Some(hash) if *hash == genesis_hash => {}
            Some(hash) => {
                return Err(ParamsError::CheckpointGenesisMismatch {
                    network,
                    checkpoint: hash.to_hex(),
                    genesis: genesis_hash.to_hex(),
                })
            }
            None => return Err(ParamsError::MissingGenesisCheckpoint { network }),
        }

        if let Some((first, second)) = self.base58.find_duplicate() {
            return Err(ParamsError::DuplicateAddressPrefix {
                network,
                first,
                second,
            });
        }

        let hex_fields = [
            ("alert_pubkey", &self.alert_pubkey),
            ("spork_pubkey", &self.masternode.spork_pubkey),
            ("zerocoin_modulus", &self.zerocoin.modulus),
        ];
        for (field, value) in hex_fields {
            hex::decode(value).map_err(|source| ParamsError::InvalidHex {
                network,
                field,
                source,
            })?;
        }

        log::debug!(
            "Sealed {} parameters: genesis {}, {} checkpoints",
            network,
            genesis_hash,
            self.checkpoints.len()
        );
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn network(&self) -> NetworkId {
        self.network
    }

    /// Four bytes prefixing every p2p message
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// Hex-encoded alert signing key
    pub fn alert_pubkey(&self) -> &str {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn activation(&self) -> &ActivationHeights {
        &self.activation
    }

    pub fn zerocoin(&self) -> &ZerocoinParams {
        &self.zerocoin
    }

    pub fn masternode(&self) -> &MasternodeParams {
        &self.masternode
    }

    /// Fields the genesis block was built from
    pub fn genesis(&self) -> &GenesisSpec {
        &self.genesis
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedSpec6] {
        &self.fixed_seeds
    }

    pub fn base58(&self) -> &AddressVersionTable {
        &self.base58
    }

    pub fn policy(&self) -> &PolicyFlags {
        &self.policy
    }

    /// The verified genesis block
    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    /// Prefix bytes for one address class on this network
    pub fn address_version(&self, class: AddressClass) -> &[u8] {
        self.base58.prefix(class)
    }

    /// Alert key bytes. Sealing guarantees the literal decodes.
    pub fn alert_key_bytes(&self) -> Vec<u8> {
        hex::decode(&self.alert_pubkey).unwrap_or_default()
    }

    /// Spork key bytes. Sealing guarantees the literal decodes.
    pub fn spork_key_bytes(&self) -> Vec<u8> {
        hex::decode(&self.masternode.spork_pubkey).unwrap_or_default()
    }

    /// Fixed seeds expanded against the wall clock
    pub fn fixed_seed_addresses(&self) -> Vec<SeedAddress> {
        expand_fixed_seeds(&self.fixed_seeds, Utc::now(), &mut OsRng)
    }

    /// Whether this is a test network (anything but Main)
    pub fn is_testnet(&self) -> bool {
        self.network != NetworkId::Main
    }

    /// Whether miners may produce blocks without connected peers
    pub fn mining_requires_peers(&self) -> bool {
        self.policy.mining_requires_peers
    }
}
