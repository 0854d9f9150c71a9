use alloy_primitives::B256;
use parking_lot::RwLock;
use ream_consensus::{
    constants::DEPOSIT_CONTRACT_TREE_DEPTH,
    deposit::Deposit,
    eth_1_data::Eth1Data,
    primitives::{DepositIndex, ExecutionBlockNumber},
    pubkey::PubKey,
};
use ream_merkle::{DepositTrie, MerkleAccumulator};
use tracing::{debug, info, instrument, warn};

use crate::{
    deposit_log::DepositLog, deposit_record::DepositRecord, error::DepositCacheError,
    finalized::FinalizedDeposits,
};

/// In-memory index of every deposit seen on the execution layer.
///
/// The log, the public key index and the finalized trie sit behind one lock, so every call
/// observes them as a single consistent unit. Readers share the lock, writers take it
/// exclusively.
pub struct DepositCache<A: MerkleAccumulator = DepositTrie> {
    inner: RwLock<DepositCacheInner<A>>,
}

struct DepositCacheInner<A> {
    log: DepositLog,
    finalized: FinalizedDeposits<A>,
}

impl DepositCache<DepositTrie> {
    pub fn new() -> Result<Self, DepositCacheError> {
        Self::with_tree_depth(DEPOSIT_CONTRACT_TREE_DEPTH as usize)
    }
}

impl<A: MerkleAccumulator> DepositCache<A> {
    pub fn with_tree_depth(depth: usize) -> Result<Self, DepositCacheError> {
        Ok(Self {
            inner: RwLock::new(DepositCacheInner {
                log: DepositLog::default(),
                finalized: FinalizedDeposits::new(depth)?,
            }),
        })
    }

    /// Adds a deposit observed at `eth1_block_height`.
    ///
    /// `index` must be the next index of the log, otherwise nothing is inserted and the
    /// expected index is reported back. A missing deposit is logged and skipped.
    #[instrument(level = "debug", skip(self, deposit))]
    pub fn insert_deposit(
        &self,
        deposit: Option<Deposit>,
        eth1_block_height: ExecutionBlockNumber,
        index: DepositIndex,
        deposit_root: B256,
    ) -> Result<(), DepositCacheError> {
        let Some(deposit) = deposit else {
            warn!("Ignoring missing deposit");
            return Ok(());
        };

        let record = DepositRecord {
            deposit,
            eth1_block_height,
            index,
            deposit_root,
        };

        let mut inner = self.inner.write();
        inner.log.insert(record).inspect_err(|error| {
            warn!(%error, "Rejected deposit");
        })?;
        debug!(deposit_count = inner.log.len(), "Inserted deposit");

        Ok(())
    }

    /// Appends deposits without checking their indices, for data that is already known to be
    /// consistent.
    #[instrument(level = "debug", skip_all, fields(count = containers.len()))]
    pub fn insert_deposit_containers(&self, containers: Vec<DepositRecord>) {
        if containers.is_empty() {
            warn!("Ignoring empty deposit container batch");
            return;
        }

        let mut inner = self.inner.write();
        inner.log.extend_unchecked(containers);
        debug!(deposit_count = inner.log.len(), "Loaded deposit containers");
    }

    /// Adds every deposit up to `eth1_deposit_index` to the finalized trie.
    ///
    /// The index is clamped to the last known deposit. Requests that do not move past the
    /// already finalized index are no-ops.
    #[instrument(level = "debug", skip(self))]
    pub fn insert_finalized_deposits(
        &self,
        eth1_deposit_index: DepositIndex,
    ) -> Result<(), DepositCacheError> {
        let mut inner = self.inner.write();
        let DepositCacheInner { log, finalized } = &mut *inner;

        let previous = finalized.merkle_trie_index();
        if finalized.extend(log, eth1_deposit_index)? {
            info!(
                previous,
                merkle_trie_index = finalized.merkle_trie_index(),
                "Finalized deposits"
            );
        } else {
            debug!(merkle_trie_index = previous, "Deposits already finalized");
        }

        Ok(())
    }

    /// Snapshot of the finalized trie, unaffected by later finalization.
    pub fn finalized_deposits(&self) -> FinalizedDeposits<A> {
        self.inner.read().finalized.clone()
    }

    pub fn all_deposit_containers(&self) -> Vec<DepositRecord> {
        self.inner.read().log.records().to_vec()
    }

    /// Deposits observed at or below `before_height`, all of them when no bound is given.
    pub fn all_deposits(&self, before_height: Option<ExecutionBlockNumber>) -> Vec<Deposit> {
        self.inner.read().log.all_deposits(before_height)
    }

    pub fn deposit_count(&self) -> u64 {
        self.inner.read().log.len() as u64
    }

    /// First deposit ever made for `pubkey` and the block height it was seen at.
    pub fn deposit_by_pubkey(&self, pubkey: &PubKey) -> Option<(Deposit, ExecutionBlockNumber)> {
        self.inner.read().log.deposit_by_pubkey(pubkey)
    }

    pub fn deposits_number_and_root_at_height(&self, height: ExecutionBlockNumber) -> (u64, B256) {
        self.inner
            .read()
            .log
            .deposits_number_and_root_at_height(height)
    }

    /// Eth1 data vote for the execution block `block_hash` at `height`.
    pub fn eth1_data_at_height(&self, height: ExecutionBlockNumber, block_hash: B256) -> Eth1Data {
        let (deposit_count, deposit_root) = self.deposits_number_and_root_at_height(height);
        Eth1Data {
            deposit_root,
            deposit_count,
            block_hash,
        }
    }

    pub fn non_finalized_deposits(
        &self,
        last_finalized_index: i64,
        before_height: Option<ExecutionBlockNumber>,
    ) -> Vec<Deposit> {
        self.inner
            .read()
            .log
            .non_finalized_deposits(last_finalized_index, before_height)
    }

    /// Drops the proofs of every deposit up to `until_index`, clamped to the log.
    #[instrument(level = "debug", skip(self))]
    pub fn prune_proofs(&self, until_index: DepositIndex) {
        let pruned = self.inner.write().log.prune_proofs(until_index);
        debug!(pruned, "Pruned deposit proofs");
    }
}
