//! CLI commands for inspecting network parameters
//!
//! Implements all command handlers for the CLI interface.

use crate::core::{u256_to_hex, Hash256};
use crate::crypto::{decode_address, pubkey_address};
use crate::mining::GenesisMiner;
use crate::params::{AddressClass, ChainParams};
use chrono::{TimeZone, Utc};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Dump the full parameter set as JSON
pub fn cmd_show(params: &ChainParams) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(params)?);
    Ok(())
}

/// Print the genesis block
pub fn cmd_genesis(params: &ChainParams) -> CliResult<()> {
    let block = params.genesis_block();
    let header = &block.header;

    println!("🧱 Genesis block ({})", params.network);
    println!("   ├─ Hash: {}", block.hash());
    println!("   ├─ Merkle root: {}", header.merkle_root);
    println!("   ├─ Version: {}", header.version);
    println!("   ├─ Time: {}", format_time(i64::from(header.time)));
    println!("   ├─ Bits: {:#010x}", header.bits);
    println!("   ├─ Nonce: {}", header.nonce);
    println!("   ├─ PoW limit: {}", u256_to_hex(&params.consensus.pow_limit));
    println!("   └─ Coinbase message: {}", params.genesis.message);

    Ok(())
}

/// List checkpoints
pub fn cmd_checkpoints(params: &ChainParams) -> CliResult<()> {
    let table = params.checkpoints();
    let data = table.data();

    println!("📌 Checkpoints ({}, {} total):", params.network, table.len());
    for (height, hash) in table.iter() {
        println!("   {:>8}  {}", height, hash);
    }
    println!("\n   Last checkpoint time: {}", format_time(data.last_checkpoint_time));
    println!("   Transactions at checkpoint: {}", data.transactions_last_checkpoint);
    println!("   Estimated transactions/day: {}", data.transactions_per_day);

    Ok(())
}

/// Check a block hash against the checkpoint at `height`
pub fn cmd_verify_checkpoint(params: &ChainParams, height: u32, hash: &str) -> CliResult<()> {
    let hash: Hash256 = hash.parse()?;
    let table = params.checkpoints();

    table.enforce(height, &hash)?;
    match table.get(height) {
        Some(_) => println!("✅ Block {} matches checkpoint at height {}", hash, height),
        None => println!("✅ No checkpoint at height {}; block accepted", height),
    }

    Ok(())
}

/// Estimate sync progress for a chain tip
pub fn cmd_progress(params: &ChainParams, chain_tx: u64, tip_time: i64) -> CliResult<()> {
    let now = Utc::now().timestamp();
    let progress = params
        .checkpoints()
        .guess_verification_progress(chain_tx, tip_time, now);

    println!("⏳ Estimated verification progress: {:.2}%", progress * 100.0);
    Ok(())
}

/// List DNS and fixed seeds
pub fn cmd_seeds(params: &ChainParams) -> CliResult<()> {
    if params.dns_seeds.is_empty() && params.fixed_seeds.is_empty() {
        println!("🌐 {} has no seeds.", params.network);
        return Ok(());
    }

    println!("🌐 DNS seeds ({}):", params.dns_seeds.len());
    for seed in &params.dns_seeds {
        println!("   {} ({})", seed.name, seed.host);
    }

    let fixed = params.fixed_seed_addresses();
    println!("\n🌐 Fixed seeds ({}):", fixed.len());
    for addr in fixed {
        println!(
            "   {}  services={:#x}  last seen {}",
            addr.addr,
            addr.services.bits(),
            addr.last_seen.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}

/// Pubkey-hash address for a hex public key
pub fn cmd_address(params: &ChainParams, pubkey_hex: &str) -> CliResult<()> {
    let pubkey = hex::decode(pubkey_hex)?;
    println!("{}", pubkey_address(&params.base58, &pubkey));
    Ok(())
}

/// Decode a base58check string on this network
pub fn cmd_decode_address(params: &ChainParams, address: &str) -> CliResult<()> {
    let (class, payload) = decode_address(&params.base58, address)?;
    println!("🔑 {} on {}", class, params.network);
    println!("   Prefix: {}", hex::encode(params.address_version(class)));
    println!("   Payload: {}", hex::encode(payload));
    if class == AddressClass::ExtPublicKey || class == AddressClass::ExtSecretKey {
        println!("   BIP44 coin type: {:#010x}", params.base58.bip44_coin_type());
    }
    Ok(())
}

/// Re-run the genesis nonce search
pub fn cmd_mine_genesis(
    params: &ChainParams,
    start_nonce: u32,
    time: Option<u32>,
    max_attempts: Option<u64>,
) -> CliResult<()> {
    let mut header = params.genesis_block().header.clone();
    header.nonce = start_nonce;
    if let Some(time) = time {
        header.time = time;
    }

    let mut miner = GenesisMiner::new(params.consensus.pow_limit);
    if let Some(max) = max_attempts {
        miner = miner.with_max_attempts(max);
    }

    println!(
        "⛏️  Searching genesis nonce for {} from {}...",
        params.network, start_nonce
    );
    let stats = miner.mine(&mut header)?;

    println!("\n   Genesis nonce found!");
    println!("   ├─ Nonce: {}", stats.nonce);
    println!("   ├─ Hash: {}", stats.hash);
    println!("   ├─ Merkle root: {}", header.merkle_root);
    println!("   ├─ Time: {}ms", stats.time_ms);
    println!("   ├─ Attempts: {}", stats.hash_attempts);
    println!("   └─ Hash rate: {:.2} H/s", stats.hash_rate);

    Ok(())
}

fn format_time(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{registry, NetworkId};

    #[test]
    fn test_verify_checkpoint_command() {
        let main = registry().get(NetworkId::Main);
        let genesis = main.genesis_block().hash().to_hex();

        assert!(cmd_verify_checkpoint(main, 0, &genesis).is_ok());
        assert!(cmd_verify_checkpoint(main, 0, &"11".repeat(32)).is_err());
        assert!(cmd_verify_checkpoint(main, 1, &"11".repeat(32)).is_ok());
        assert!(cmd_verify_checkpoint(main, 0, "xyz").is_err());
    }

    #[test]
    fn test_address_commands() {
        let test = registry().get(NetworkId::Testnet);
        assert!(cmd_address(test, &"02".repeat(33)).is_ok());
        assert!(cmd_address(test, "zz").is_err());
        assert!(cmd_decode_address(test, "not-base58!").is_err());
    }

    #[test]
    fn test_mine_genesis_command() {
        let regtest = registry().get(NetworkId::Regtest);
        assert!(cmd_mine_genesis(regtest, 0, None, Some(100)).is_ok());

        let main = registry().get(NetworkId::Main);
        assert!(cmd_mine_genesis(main, 0, None, Some(1)).is_err());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "1970-01-01 00:00:00 UTC");
    }
}
