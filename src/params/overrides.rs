//! Derived networks
//!
//! A derived network is a full copy of its parent with an explicit list of
//! field overrides applied, then sealed again. Nothing is shared between
//! parent and child after derivation.

use super::address::AddressVersionTable;
use super::chain::{ChainParams, PolicyFlags};
use super::checkpoints::CheckpointTable;
use super::network_id::NetworkId;
use super::ParamsError;
use crate::core::{Amount, Hash256, U256};
use crate::network::seeds::{DnsSeed, SeedSpec6};

/// One field change applied while deriving a network
#[derive(Debug, Clone)]
pub enum ParamOverride {
    MessageStart([u8; 4]),
    AlertPubKey(&'static str),
    DefaultPort(u16),
    ProofOfWorkLimit(U256),
    SubsidyHalvingInterval(u32),
    MajorityThresholds {
        enforce: u32,
        reject: u32,
        window: u32,
    },
    MinerThreads(u32),
    TargetTimespan(i64),
    TargetSpacing(i64),
    CoinbaseMaturity(u32),
    MasternodeCountDrift(u32),
    MaxMoneyOut(Amount),
    LastPowBlock(i32),
    ModifierUpdateBlock(i32),
    ZerocoinStart {
        height: i32,
        time: i64,
    },
    SerialRangeEnforcement(i32),
    AccumulatorRecalculation {
        recalculate: i32,
        first_fraudulent: i32,
        last_good_checkpoint: i32,
    },
    GenesisTime(u32),
    GenesisBits(u32),
    GenesisNonce(u32),
    GenesisExpectedHash(Hash256),
    Checkpoints(CheckpointTable),
    DnsSeeds(Vec<DnsSeed>),
    FixedSeeds(Vec<SeedSpec6>),
    /// Drop both DNS and fixed seeds
    ClearSeeds,
    AddressVersions(AddressVersionTable),
    Policy(PolicyFlags),
    SporkKey(&'static str),
    ObfuscationPoolDummyAddress(&'static str),
    StartMasternodePayments(i64),
    PoolMaxTransactions(u32),
    BudgetFeeConfirmations(u32),
}

impl ParamOverride {
    /// Apply this override to `params` in place
    pub fn apply(self, params: &mut ChainParams) {
        let consensus = &mut params.consensus;
        let activation = &mut params.activation;
        match self {
            ParamOverride::MessageStart(magic) => params.message_start = magic,
            ParamOverride::AlertPubKey(key) => params.alert_pubkey = key.to_string(),
            ParamOverride::DefaultPort(port) => params.default_port = port,
            ParamOverride::ProofOfWorkLimit(limit) => consensus.pow_limit = limit,
            ParamOverride::SubsidyHalvingInterval(n) => consensus.subsidy_halving_interval = n,
            ParamOverride::MajorityThresholds {
                enforce,
                reject,
                window,
            } => {
                consensus.enforce_block_upgrade_majority = enforce;
                consensus.reject_block_outdated_majority = reject;
                consensus.to_check_block_upgrade_majority = window;
            }
            ParamOverride::MinerThreads(n) => consensus.miner_threads = n,
            ParamOverride::TargetTimespan(secs) => consensus.target_timespan = secs,
            ParamOverride::TargetSpacing(secs) => consensus.target_spacing = secs,
            ParamOverride::CoinbaseMaturity(n) => consensus.coinbase_maturity = n,
            ParamOverride::MasternodeCountDrift(n) => consensus.masternode_count_drift = n,
            ParamOverride::MaxMoneyOut(amount) => consensus.max_money_out = amount,
            ParamOverride::LastPowBlock(h) => activation.last_pow_block = h,
            ParamOverride::ModifierUpdateBlock(h) => activation.modifier_update_block = h,
            ParamOverride::ZerocoinStart { height, time } => {
                activation.zerocoin_start_height = height;
                activation.zerocoin_start_time = time;
            }
            ParamOverride::SerialRangeEnforcement(h) => activation.enforce_serial_range = h,
            ParamOverride::AccumulatorRecalculation {
                recalculate,
                first_fraudulent,
                last_good_checkpoint,
            } => {
                activation.recalculate_accumulators = recalculate;
                activation.first_fraudulent_block = first_fraudulent;
                activation.last_good_checkpoint = last_good_checkpoint;
            }
            ParamOverride::GenesisTime(time) => params.genesis.time = time,
            ParamOverride::GenesisBits(bits) => params.genesis.bits = bits,
            ParamOverride::GenesisNonce(nonce) => params.genesis.nonce = nonce,
            ParamOverride::GenesisExpectedHash(hash) => params.genesis.expected_hash = hash,
            ParamOverride::Checkpoints(table) => params.checkpoints = table,
            ParamOverride::DnsSeeds(seeds) => params.dns_seeds = seeds,
            ParamOverride::FixedSeeds(seeds) => params.fixed_seeds = seeds,
            ParamOverride::ClearSeeds => {
                params.dns_seeds.clear();
                params.fixed_seeds.clear();
            }
            ParamOverride::AddressVersions(table) => params.base58 = table,
            ParamOverride::Policy(flags) => params.policy = flags,
            ParamOverride::SporkKey(key) => params.masternode.spork_pubkey = key.to_string(),
            ParamOverride::ObfuscationPoolDummyAddress(addr) => {
                params.masternode.obfuscation_pool_dummy_address = addr.to_string()
            }
            ParamOverride::StartMasternodePayments(time) => {
                params.masternode.start_masternode_payments = time
            }
            ParamOverride::PoolMaxTransactions(n) => params.masternode.pool_max_transactions = n,
            ParamOverride::BudgetFeeConfirmations(n) => {
                params.masternode.budget_fee_confirmations = n
            }
        }
    }
}

/// Copy `parent`, apply `overrides` in order and seal the result as `network`
pub fn derive_from(
    parent: &ChainParams,
    network: NetworkId,
    overrides: Vec<ParamOverride>,
) -> Result<ChainParams, ParamsError> {
    let mut params = parent.clone();
    params.network = network;

    let count = overrides.len();
    for change in overrides {
        change.apply(&mut params);
    }

    log::debug!(
        "Derived {} from {} with {} overrides",
        network,
        parent.network,
        count
    );
    params.seal()
}
