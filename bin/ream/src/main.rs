use clap::Parser;
use ream::{
    cli::{Cli, Commands},
    replay::{load_deposits, replay},
};
use ream_deposit_cache::DepositCache;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deposits(cmd) => {
            // `RUST_LOG` wins over the verbosity flag
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cmd.log_level()));
            tracing_subscriber::fmt().with_env_filter(filter).init();

            info!(path = %cmd.deposits.display(), "Replaying deposits");

            let cache = DepositCache::new()?;
            let records = load_deposits(&cmd.deposits)?;
            let summary = replay(&cache, records, &cmd.replay_options())?;

            info!(
                deposit_count = summary.deposit_count,
                merkle_trie_index = summary.merkle_trie_index,
                finalized_root = %summary.finalized_root,
                "Deposit cache ready"
            );
            if let Some(eth1_data) = summary.eth1_data {
                info!(
                    deposit_root = %eth1_data.deposit_root,
                    deposit_count = eth1_data.deposit_count,
                    block_hash = %eth1_data.block_hash,
                    "Eth1 data"
                );
            }
        }
    }

    Ok(())
}
