//! Chainparams CLI Application
//!
//! A command-line interface for inspecting network parameters.

use clap::{Parser, Subcommand};
use chainparams::cli::{self, NetworkConfig};
use chainparams::params::select_params;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chainparams")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "Inspect network consensus parameters", long_about = None)]
struct Cli {
    /// Use the public test network
    #[arg(long, global = true)]
    testnet: bool,

    /// Use the local regression-test network
    #[arg(long, global = true)]
    regtest: bool,

    /// Network by name (main, test, regtest, unittest)
    #[arg(short, long, global = true)]
    network: Option<String>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump all parameters as JSON
    Show,

    /// Show the genesis block
    Genesis,

    /// List checkpoints
    Checkpoints,

    /// Check a block hash against the checkpoint table
    VerifyCheckpoint {
        /// Block height
        #[arg(long)]
        height: u32,

        /// Block hash (hex, display order)
        #[arg(long)]
        hash: String,
    },

    /// Estimate verification progress of a chain tip
    Progress {
        /// Cumulative transaction count at the tip
        #[arg(long)]
        chain_tx: u64,

        /// Tip block time (unix seconds)
        #[arg(long)]
        tip_time: i64,
    },

    /// List DNS and fixed seeds
    Seeds,

    /// Address operations
    Address {
        #[command(subcommand)]
        action: AddressCommands,
    },

    /// Search for a genesis nonce
    MineGenesis {
        /// Nonce to start from
        #[arg(long, default_value = "0")]
        start_nonce: u32,

        /// Override the genesis time
        #[arg(long)]
        time: Option<u32>,

        /// Give up after this many hashes
        #[arg(long)]
        max_attempts: Option<u64>,
    },
}

#[derive(Subcommand)]
enum AddressCommands {
    /// Encode a public key as a pubkey-hash address
    Encode {
        /// Public key (hex)
        #[arg(short, long)]
        pubkey: String,
    },

    /// Decode a base58check string
    Decode {
        /// Encoded address or key
        #[arg(short, long)]
        address: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = NetworkConfig::load_or_default(cli.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let network = config.resolve_network(cli.testnet, cli.regtest, cli.network.as_deref())?;
    let params = select_params(network);

    match cli.command {
        Commands::Show => {
            cli::cmd_show(params)?;
        }

        Commands::Genesis => {
            cli::cmd_genesis(params)?;
        }

        Commands::Checkpoints => {
            cli::cmd_checkpoints(params)?;
        }

        Commands::VerifyCheckpoint { height, hash } => {
            cli::cmd_verify_checkpoint(params, height, &hash)?;
        }

        Commands::Progress { chain_tx, tip_time } => {
            cli::cmd_progress(params, chain_tx, tip_time)?;
        }

        Commands::Seeds => {
            cli::cmd_seeds(params)?;
        }

        Commands::Address { action } => match action {
            AddressCommands::Encode { pubkey } => {
                cli::cmd_address(params, &pubkey)?;
            }
            AddressCommands::Decode { address } => {
                cli::cmd_decode_address(params, &address)?;
            }
        },

        Commands::MineGenesis {
            start_nonce,
            time,
            max_attempts,
        } => {
            cli::cmd_mine_genesis(params, start_nonce, time, max_attempts)?;
        }
    }

    Ok(())
}
