//! The four network definitions
//!
//! Main is built from literals. Testnet derives from Main, Regtest from
//! Testnet and Unittest from Main.

use super::address::AddressVersionTable;
use super::chain::{
    ActivationHeights, ChainParams, ConsensusParams, MasternodeParams, PolicyFlags,
    ZerocoinParams, NEVER,
};
use super::checkpoints::{CheckpointData, CheckpointTable};
use super::genesis::GenesisSpec;
use super::network_id::NetworkId;
use super::overrides::{derive_from, ParamOverride};
use super::ParamsError;
use crate::core::{Hash256, COIN, U256, ZCENT, ZEROCOIN_HEADER_VERSION};
use crate::network::seeds::{DnsSeed, SeedSpec6};
use std::net::Ipv4Addr;

// =============================================================================
// Shared Genesis Inputs
// =============================================================================

/// Coinbase timestamp message shared by every network's genesis block
pub const GENESIS_MESSAGE: &str = "BitMoney V2 Phoenix is Born - Jacob is Gone";

/// Key the genesis coinbase pays to
pub const GENESIS_OUTPUT_PUBKEY: &str = "0408287b53c96f466269c6b9f759d1d108f86eabff18afc539e22a2a3b77b5ba90229662fe6cd0d4e79b29bb64b8b0fd7b0635e4df767551e990c4915f5cf7387a";

/// Merkle root of the genesis coinbase (identical on all networks)
pub const GENESIS_MERKLE_ROOT: &str =
    "69ce58136f49e4b752e4a9d932dca99dea3d0e6847f6e685bf595c7709623dca";

/// Quark hashes of each network's genesis header
pub const MAIN_GENESIS_HASH: &str =
    "c9b627cd7af564c2586bfaa81e8b2da994f4a47abd2e6fca72aec92af8612e5a";
pub const TESTNET_GENESIS_HASH: &str =
    "dd88bb41ad002c81a308f0d695bf96f90c2ea0f1c37c0f8efa70140bb4bd6ea9";
pub const REGTEST_GENESIS_HASH: &str =
    "5f03bd649d4bd24d92be04cf20747d51f7d2acbecd57090f15639f5c1ab1a572";

/// Compact target shared by all genesis headers
const GENESIS_BITS: u32 = 0x1e0f_fff0;

/// Trusted zerocoin RSA modulus (3072 bits)
const ZEROCOIN_MODULUS: &str = concat!(
    "a6cf179443c8fcd54c3cb653e15b95c61f451fc0e9846ee25f223c637fcf1db0",
    "4beee20200b501944a3c688e9d5ff679a22695bd871812929b11ea7e92a68e56",
    "82b6a0abf367cf75cc865640c34926497fe03bd733d3f5ef757f865de4c7db78",
    "531c4598a7ddf6c676a98bbc9f5ccbab83772eb39915ef305f1e4964bb196bd4",
    "a9b307d3737253e947cf1e54f90a04dd3dad97c0ad2cc0d9d990893dc6a1545b",
    "929d4ff2154e1f5acda1f7513d4c81dc15bb2aa1d8fe65a73de7c7aaa4bf54b0",
    "43ecace1e5d475b5eb05d7f83b59fdb9f1fa586af318765f0ac85c25f35b8e76",
    "9eb8aa32538fc5fc21f388d87e0c5e2897eb0173465c148ea9e0f7814b979002",
    "37f18ecb48a2d21b974365c698fbaa53970e36f2269ad3dcab5700d7b6a5365a",
    "25e3ef6cb3a9c210b65fbacc8ff3c4efc56bed0f0b49b95f1c0307316645e2ba",
    "32b58f142d8dfae578dc549e8840d59b6bff267a632f99030e777263812f2602",
    "59588efd75e6cf51afb479d46c66463e05e2981ac02c995a42313cbdaf4bc145",
);

// =============================================================================
// Main
// =============================================================================

const MAIN_PORT: u16 = 49444;

/// DNS seed hosts, also compiled in as the fixed seed list
const MAIN_SEED_IPS: [Ipv4Addr; 4] = [
    Ipv4Addr::new(95, 179, 193, 119),
    Ipv4Addr::new(45, 32, 176, 66),
    Ipv4Addr::new(95, 179, 197, 142),
    Ipv4Addr::new(95, 179, 200, 18),
];

const MAIN_CHECKPOINTS: &[(u32, &str)] = &[
    (0, MAIN_GENESIS_HASH),
    (22, "45b8362f68be8d0948b9f48ffbd2af8598740ec6e1a920e2885bd6453b136a05"),
    (26, "3f50d50d8885a7393460f539fa42a4e12268a6efaf399a268709df5d1b08e972"),
    (120, "e9aa0316df6bc4020ea4a7161a6d4f2eaac075104d77d2806075364ae8bbc847"),
    (142, "3c113e8f036d16afd5096cf2c7522c4cae648bb18887e20fa67b1baf1036b0f4"),
    (198, "3bc3c68f21a860c5e835840f2dc0d1b0555170ac9ba38e869c63b4ad3e3740eb"),
    (256, "f7b0dab209a9f000c7f25d11fc89f70b2eae368ae400b15c42aab19766d220c6"),
];

/// Production network
pub fn main_params() -> Result<ChainParams, ParamsError> {
    let consensus = ConsensusParams {
        pow_limit: U256::MAX >> 20usize,
        subsidy_halving_interval: 210_000,
        max_reorganization_depth: 100,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 0,
        target_timespan: 30,
        target_spacing: 60,
        target_spacing_slow_launch: 10 * 60,
        coinbase_maturity: 19,
        masternode_count_drift: 20,
        max_money_out: 70_000_000_000 * COIN,
    };

    let activation = ActivationHeights {
        last_pow_block: 100,
        modifier_update_block: 999_999_999,
        zerocoin_start_height: 601,
        zerocoin_start_time: 1_541_030_400,
        zerocoin_accumulator_start_height: 1,
        enforce_serial_range: 1,
        recalculate_accumulators: NEVER,
        first_fraudulent_block: NEVER,
        last_good_checkpoint: NEVER,
    };

    let zerocoin = ZerocoinParams {
        modulus: ZEROCOIN_MODULUS.to_string(),
        max_spends_per_transaction: 7,
        min_mint_fee: ZCENT,
        mint_required_confirmations: 20,
        required_accumulation: 1,
        default_security_level: 100,
        header_version: ZEROCOIN_HEADER_VERSION,
    };

    let masternode = MasternodeParams {
        spork_pubkey: "03c4f9d42586766f08a576c1c12bc4341243cd0d38540d88930e758d01bc614a7b"
            .to_string(),
        obfuscation_pool_dummy_address: "PXH4xkfoACR8AVAx6hcY6rffKA5469sUfm".to_string(),
        start_masternode_payments: 1_532_051_032 + 6000,
        pool_max_transactions: 3,
        budget_fee_confirmations: 6,
    };

    let genesis = GenesisSpec {
        version: 1,
        time: 1_538_783_565,
        bits: GENESIS_BITS,
        nonce: 4_974_290,
        message: GENESIS_MESSAGE.to_string(),
        reward: COIN,
        output_pubkey: GENESIS_OUTPUT_PUBKEY.to_string(),
        expected_hash: Hash256::from_hex(MAIN_GENESIS_HASH)?,
        expected_merkle_root: Hash256::from_hex(GENESIS_MERKLE_ROOT)?,
    };

    let checkpoints = CheckpointTable::from_literals(
        MAIN_CHECKPOINTS,
        CheckpointData {
            last_checkpoint_time: 1_539_182_060,
            transactions_last_checkpoint: 0,
            transactions_per_day: 2000.0,
        },
    )?;

    let dns_seeds = MAIN_SEED_IPS
        .iter()
        .map(|ip| DnsSeed::new(ip.to_string(), ip.to_string()))
        .collect();
    let fixed_seeds = MAIN_SEED_IPS
        .iter()
        .map(|ip| SeedSpec6::from_ipv4(*ip, MAIN_PORT))
        .collect();

    let base58 = AddressVersionTable {
        pubkey_hash: 55,
        script_hash: 108,
        secret_key: 117,
        ext_public_key: [0x06, 0x3f, 0x44, 0x23],
        ext_secret_key: [0x09, 0x61, 0x22, 0x2d],
        ext_coin_type: [0x20, 0x01, 0x1f, 0x6c],
    };

    let policy = PolicyFlags {
        require_rpc_password: true,
        mining_requires_peers: true,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        testnet_to_be_deprecated_field_rpc: false,
        headers_first_syncing_active: false,
    };

    ChainParams::assemble(
        NetworkId::Main,
        [0xf9, 0xcd, 0x3b, 0x68],
        "04bef0e73664d22c8b0be13ecaab85b68553b55d5ce8d17df0da1d9381c12bd57f5fb0e6db32850822600413b50bc131a3459439957280342d5aa5f4d7a3816c1b",
        MAIN_PORT,
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
    )
}

// =============================================================================
// Testnet
// =============================================================================

/// Public test network, derived from Main
pub fn testnet_params(main: &ChainParams) -> Result<ChainParams, ParamsError> {
    let checkpoints = CheckpointTable::from_literals(
        &[(0, TESTNET_GENESIS_HASH)],
        CheckpointData {
            last_checkpoint_time: 1_538_783_565,
            transactions_last_checkpoint: 0,
            transactions_per_day: 250.0,
        },
    )?;

    derive_from(
        main,
        NetworkId::Testnet,
        vec![
            ParamOverride::MessageStart([0xc7, 0xff, 0x2d, 0x4f]),
            ParamOverride::AlertPubKey("04a62416422cc32e2295112f0803ab1c594e0b787c9f21b432e44cf37bf1cbf77cb0248dabb3cea6917780e3d0ee4ffb7753517c55a94b98f779ee918449f0d5b3"),
            ParamOverride::DefaultPort(32545),
            ParamOverride::MajorityThresholds {
                enforce: 51,
                reject: 75,
                window: 100,
            },
            ParamOverride::MinerThreads(0),
            ParamOverride::TargetTimespan(60),
            ParamOverride::TargetSpacing(60),
            ParamOverride::LastPowBlock(200),
            ParamOverride::CoinbaseMaturity(15),
            ParamOverride::MasternodeCountDrift(4),
            ParamOverride::ModifierUpdateBlock(51_197),
            ParamOverride::MaxMoneyOut(43_199_500 * COIN),
            ParamOverride::ZerocoinStart {
                height: 201_576,
                time: 1_524_711_188,
            },
            ParamOverride::SerialRangeEnforcement(1),
            ParamOverride::AccumulatorRecalculation {
                recalculate: 9_908_000,
                first_fraudulent: 9_891_737,
                last_good_checkpoint: 9_891_730,
            },
            ParamOverride::GenesisTime(1_515_616_140),
            ParamOverride::GenesisNonce(79_855),
            ParamOverride::GenesisExpectedHash(Hash256::from_hex(TESTNET_GENESIS_HASH)?),
            ParamOverride::Checkpoints(checkpoints),
            ParamOverride::ClearSeeds,
            ParamOverride::AddressVersions(AddressVersionTable {
                pubkey_hash: 139,
                script_hash: 19,
                secret_key: 239,
                ext_public_key: [0x3a, 0x80, 0x61, 0xa0],
                ext_secret_key: [0x3a, 0x80, 0x58, 0x37],
                ext_coin_type: [0x80, 0x00, 0x00, 0x01],
            }),
            ParamOverride::Policy(PolicyFlags {
                require_rpc_password: true,
                mining_requires_peers: true,
                allow_min_difficulty_blocks: true,
                default_consistency_checks: false,
                require_standard: false,
                mine_blocks_on_demand: false,
                testnet_to_be_deprecated_field_rpc: true,
                ..main.policy
            }),
            ParamOverride::PoolMaxTransactions(2),
            ParamOverride::SporkKey("04aa681dd00d9c55d4c28367757b461f78d452de73d63678c04f62ae7047707a58c0477311c6f047056a9a02e904513b9ee80a993ac97667cf27ad07549f2d42f7"),
            ParamOverride::ObfuscationPoolDummyAddress("xp87cG8UEQgzs1Bk67Yk884C7pnQfAeo7q"),
            ParamOverride::StartMasternodePayments(1_420_837_558),
            ParamOverride::BudgetFeeConfirmations(3),
        ],
    )
}

// =============================================================================
// Regtest
// =============================================================================

/// Local regression-test network, derived from Testnet
pub fn regtest_params(testnet: &ChainParams) -> Result<ChainParams, ParamsError> {
    let checkpoints = CheckpointTable::from_literals(
        &[(0, REGTEST_GENESIS_HASH)],
        CheckpointData {
            last_checkpoint_time: 1_538_783_565,
            transactions_last_checkpoint: 0,
            transactions_per_day: 100.0,
        },
    )?;

    derive_from(
        testnet,
        NetworkId::Regtest,
        vec![
            ParamOverride::MessageStart([0xc2, 0xfd, 0x5c, 0x1f]),
            ParamOverride::SubsidyHalvingInterval(150),
            ParamOverride::MajorityThresholds {
                enforce: 750,
                reject: 950,
                window: 1000,
            },
            ParamOverride::MinerThreads(1),
            ParamOverride::TargetTimespan(24 * 60 * 60),
            ParamOverride::TargetSpacing(60),
            ParamOverride::ProofOfWorkLimit(U256::MAX >> 1usize),
            ParamOverride::GenesisTime(1_515_524_400),
            ParamOverride::GenesisBits(GENESIS_BITS),
            ParamOverride::GenesisNonce(732_084),
            ParamOverride::GenesisExpectedHash(Hash256::from_hex(REGTEST_GENESIS_HASH)?),
            ParamOverride::Checkpoints(checkpoints),
            ParamOverride::DefaultPort(53546),
            ParamOverride::ClearSeeds,
            ParamOverride::Policy(PolicyFlags {
                require_rpc_password: false,
                mining_requires_peers: false,
                allow_min_difficulty_blocks: true,
                default_consistency_checks: true,
                require_standard: false,
                mine_blocks_on_demand: true,
                testnet_to_be_deprecated_field_rpc: false,
                ..testnet.policy
            }),
        ],
    )
}

// =============================================================================
// Unittest
// =============================================================================

/// In-process unit-test network, derived from Main.
///
/// Keeps Main's genesis and checkpoints but gets its own message start so
/// no two networks share magic bytes.
pub fn unittest_params(main: &ChainParams) -> Result<ChainParams, ParamsError> {
    derive_from(
        main,
        NetworkId::Unittest,
        vec![
            ParamOverride::MessageStart([0xe4, 0xb7, 0x2a, 0x91]),
            ParamOverride::DefaultPort(53547),
            ParamOverride::ClearSeeds,
            ParamOverride::Policy(PolicyFlags {
                require_rpc_password: false,
                mining_requires_peers: false,
                default_consistency_checks: true,
                allow_min_difficulty_blocks: false,
                mine_blocks_on_demand: true,
                ..main.policy
            }),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target_from_compact;

    #[test]
    fn test_main_constants() {
        let main = main_params().unwrap();
        assert_eq!(main.default_port, 49444);
        assert_eq!(main.message_start, [0xf9, 0xcd, 0x3b, 0x68]);
        assert_eq!(main.consensus.max_money_out, 70_000_000_000 * COIN);
        assert_eq!(main.consensus.target_spacing_slow_launch, 600);
        assert_eq!(main.activation.recalculate_accumulators, -2);
        assert_eq!(main.zerocoin.min_mint_fee, ZCENT);
        assert_eq!(main.masternode.start_masternode_payments, 1_532_057_032);
        assert_eq!(main.base58.bip44_coin_type(), 0x2001_1f6c);
        assert_eq!(main.dns_seeds.len(), 4);
        assert_eq!(main.fixed_seeds.len(), 4);
        assert_eq!(main.checkpoints().len(), 7);
    }

    #[test]
    fn test_genesis_header_fields() {
        let main = main_params().unwrap();
        let test = testnet_params(&main).unwrap();
        let regtest = regtest_params(&test).unwrap();

        for (params, time, nonce, hash) in [
            (&main, 1_538_783_565, 4_974_290, MAIN_GENESIS_HASH),
            (&test, 1_515_616_140, 79_855, TESTNET_GENESIS_HASH),
            (&regtest, 1_515_524_400, 732_084, REGTEST_GENESIS_HASH),
        ] {
            let header = &params.genesis_block().header;
            assert_eq!(header.version, 1);
            assert_eq!(header.time, time);
            assert_eq!(header.bits, GENESIS_BITS);
            assert_eq!(header.nonce, nonce);
            assert_eq!(header.hash().to_hex(), hash);
            assert_eq!(header.merkle_root.to_hex(), GENESIS_MERKLE_ROOT);
        }
    }

    #[test]
    fn test_testnet_inherits_unoverridden_fields() {
        let main = main_params().unwrap();
        let test = testnet_params(&main).unwrap();

        assert_eq!(test.consensus.pow_limit, main.consensus.pow_limit);
        assert_eq!(test.consensus.subsidy_halving_interval, 210_000);
        assert_eq!(test.consensus.target_spacing_slow_launch, 600);
        assert_eq!(test.zerocoin, main.zerocoin);
        assert!(!test.policy.skip_proof_of_work_check);
        assert_eq!(test.masternode.budget_fee_confirmations, 3);
        assert_eq!(test.consensus.coinbase_maturity, 15);
    }

    #[test]
    fn test_regtest_chain_of_derivation() {
        let main = main_params().unwrap();
        let test = testnet_params(&main).unwrap();
        let regtest = regtest_params(&test).unwrap();

        // From Testnet, not Main
        assert_eq!(regtest.base58, test.base58);
        assert_eq!(regtest.consensus.coinbase_maturity, 15);
        assert_eq!(regtest.masternode.spork_pubkey, test.masternode.spork_pubkey);
        // Its own
        assert_eq!(regtest.consensus.subsidy_halving_interval, 150);
        assert_eq!(regtest.consensus.miner_threads, 1);
        assert_eq!(regtest.consensus.pow_limit, U256::MAX >> 1usize);
        assert!(regtest.policy.mine_blocks_on_demand);
    }

    #[test]
    fn test_unittest_shares_main_genesis() {
        let main = main_params().unwrap();
        let unit = unittest_params(&main).unwrap();

        assert_eq!(unit.genesis_block().hash(), main.genesis_block().hash());
        assert_eq!(unit.checkpoints(), main.checkpoints());
        assert_ne!(unit.message_start, main.message_start);
        assert!(unit.dns_seeds.is_empty() && unit.fixed_seeds.is_empty());
        assert!(!unit.policy.mining_requires_peers);
        assert!(unit.policy.require_standard);
    }

    #[test]
    fn test_genesis_bits_within_limit() {
        let main = main_params().unwrap();
        let target = target_from_compact(main.genesis.bits).unwrap();
        assert!(target <= main.consensus.pow_limit);
    }
}
