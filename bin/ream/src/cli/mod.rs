use std::path::PathBuf;

use alloy_primitives::B256;
use clap::{Parser, Subcommand};

use crate::replay::ReplayOptions;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a deposit log through the deposit cache
    #[command(name = "deposits")]
    Deposits(DepositsCommand),
}

#[derive(Debug, Parser)]
pub struct DepositsCommand {
    /// Verbosity level
    #[arg(short, long, default_value_t = 3)]
    pub verbosity: u8,

    /// YAML file with the deposit records in contract order
    #[arg(long, env = "REAM_DEPOSITS")]
    pub deposits: PathBuf,

    /// Highest deposit index to add to the finalized trie
    #[arg(long)]
    pub finalize: Option<u64>,

    /// Drop deposit proofs up to this index
    #[arg(long)]
    pub prune: Option<u64>,

    /// Execution block height to build the Eth1 data vote for
    #[arg(long)]
    pub height: Option<u64>,

    /// Execution block hash of the Eth1 data vote
    #[arg(long, default_value_t = B256::ZERO)]
    pub block_hash: B256,
}

impl DepositsCommand {
    /// Log directive used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }

    pub fn replay_options(&self) -> ReplayOptions {
        ReplayOptions {
            finalize: self.finalize,
            prune: self.prune,
            height: self.height,
            block_hash: self.block_hash,
        }
    }
}
