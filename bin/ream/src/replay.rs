use std::path::Path;

use alloy_primitives::B256;
use anyhow::{ensure, Context};
use ream_consensus::eth_1_data::Eth1Data;
use ream_deposit_cache::{DepositCache, DepositRecord};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    pub finalize: Option<u64>,
    pub prune: Option<u64>,
    pub height: Option<u64>,
    pub block_hash: B256,
}

#[derive(Debug, PartialEq)]
pub struct ReplaySummary {
    pub deposit_count: u64,
    pub merkle_trie_index: i64,
    pub finalized_root: B256,
    pub eth1_data: Option<Eth1Data>,
}

pub fn load_deposits(path: &Path) -> anyhow::Result<Vec<DepositRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read deposits from {}", path.display()))?;
    parse_deposits(&content).with_context(|| format!("invalid deposits in {}", path.display()))
}

pub fn parse_deposits(content: &str) -> anyhow::Result<Vec<DepositRecord>> {
    Ok(serde_yaml::from_str(content)?)
}

/// Feeds `records` through `cache` the way the deposit watcher and finalization would.
pub fn replay(
    cache: &DepositCache,
    records: Vec<DepositRecord>,
    options: &ReplayOptions,
) -> anyhow::Result<ReplaySummary> {
    ensure!(!records.is_empty(), "no deposits to replay");

    for record in records {
        let index = record.index;
        cache
            .insert_deposit(
                Some(record.deposit),
                record.eth1_block_height,
                index,
                record.deposit_root,
            )
            .with_context(|| format!("cannot insert deposit {index}"))?;
    }
    info!(deposit_count = cache.deposit_count(), "Inserted deposits");

    if let Some(index) = options.finalize {
        cache.insert_finalized_deposits(index)?;
    }
    if let Some(index) = options.prune {
        cache.prune_proofs(index);
    }

    let finalized = cache.finalized_deposits();
    let eth1_data = options
        .height
        .map(|height| cache.eth1_data_at_height(height, options.block_hash));

    Ok(ReplaySummary {
        deposit_count: cache.deposit_count(),
        merkle_trie_index: finalized.merkle_trie_index(),
        finalized_root: finalized.deposit_root(),
        eth1_data,
    })
}
