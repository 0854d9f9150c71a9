use std::sync::Arc;

use alloy_primitives::B256;
use ream_consensus::primitives::DepositIndex;
use ream_merkle::{DepositTrie, MerkleAccumulator};
use tree_hash::TreeHash;

use crate::{deposit_log::DepositLog, error::DepositCacheError};

/// `merkle_trie_index` of a cache that has not finalized any deposit.
pub const EMPTY_MERKLE_TRIE_INDEX: i64 = -1;

/// Trie over every finalized deposit and the index of the last one it holds.
///
/// Snapshots share the trie with the cache. Extending builds the longer trie on a copy and
/// swaps it in only once every leaf is inserted, so a handed out snapshot never changes and
/// `trie().item_count() == merkle_trie_index() + 1` always holds.
#[derive(Debug, Clone)]
pub struct FinalizedDeposits<A = DepositTrie> {
    trie: Arc<A>,
    merkle_trie_index: i64,
}

impl<A: MerkleAccumulator> FinalizedDeposits<A> {
    pub fn new(depth: usize) -> Result<Self, DepositCacheError> {
        Ok(Self {
            trie: Arc::new(A::build_from_leaves(&[], depth)?),
            merkle_trie_index: EMPTY_MERKLE_TRIE_INDEX,
        })
    }

    pub fn trie(&self) -> &A {
        &self.trie
    }

    pub fn merkle_trie_index(&self) -> i64 {
        self.merkle_trie_index
    }

    pub fn is_empty(&self) -> bool {
        self.merkle_trie_index == EMPTY_MERKLE_TRIE_INDEX
    }

    /// Root of the finalized trie with the deposit count mixed in.
    pub fn deposit_root(&self) -> B256 {
        self.trie.hash_tree_root()
    }

    /// Extends the trie with every deposit in `(merkle_trie_index, eth1_deposit_index]`.
    ///
    /// `eth1_deposit_index` is clamped to the last deposit in `log`. Requests at or below the
    /// current index leave the trie untouched. Returns whether the trie advanced.
    pub(crate) fn extend(
        &mut self,
        log: &DepositLog,
        eth1_deposit_index: DepositIndex,
    ) -> Result<bool, DepositCacheError> {
        if log.is_empty() {
            return Ok(false);
        }
        let last = log.len() - 1;
        let target = usize::try_from(eth1_deposit_index).map_or(last, |index| index.min(last));
        if target as i64 <= self.merkle_trie_index {
            return Ok(false);
        }

        let start = (self.merkle_trie_index + 1) as usize;
        let mut trie = A::clone(&self.trie);
        for (position, record) in log.records().iter().enumerate().take(target + 1).skip(start) {
            trie.insert(record.deposit.data.tree_hash_root(), position)?;
        }
        self.trie = Arc::new(trie);
        self.merkle_trie_index = target as i64;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use ream_consensus::{
        constants::{DEPOSIT_CONTRACT_TREE_DEPTH, PUBKEY_LENGTH},
        deposit::Deposit,
        deposit_data::DepositData,
        pubkey::PubKey,
        signature::Signature,
    };
    use ream_merkle::MerkleError;
    use ssz_types::{FixedVector, VariableList};

    use super::*;
    use crate::deposit_record::DepositRecord;

    const DEPTH: usize = DEPOSIT_CONTRACT_TREE_DEPTH as usize;

    fn log(count: u64) -> DepositLog {
        let mut log = DepositLog::default();
        for index in 0..count {
            log.insert(DepositRecord {
                deposit: Deposit {
                    proof: VariableList::empty(),
                    data: DepositData {
                        pubkey: PubKey {
                            inner: FixedVector::from(vec![index as u8; PUBKEY_LENGTH]),
                        },
                        withdrawal_credentials: B256::ZERO,
                        amount: 32_000_000_000,
                        signature: Signature::default(),
                    },
                },
                eth1_block_height: index,
                index,
                deposit_root: B256::ZERO,
            })
            .unwrap();
        }
        log
    }

    fn batch_root(log: &DepositLog, count: usize) -> B256 {
        let leaves: Vec<_> = log.records()[..count]
            .iter()
            .map(|record| record.deposit.data.tree_hash_root())
            .collect();
        DepositTrie::build_from_leaves(&leaves, DEPTH)
            .unwrap()
            .hash_tree_root()
    }

    #[test]
    fn test_empty_log_keeps_sentinel() {
        let mut finalized = FinalizedDeposits::<DepositTrie>::new(DEPTH).unwrap();

        assert_eq!(finalized.extend(&DepositLog::default(), 5), Ok(false));
        assert!(finalized.is_empty());
        assert_eq!(finalized.trie().item_count(), 0);
    }

    #[rstest::rstest]
    #[case(0, 0)]
    #[case(4, 4)]
    #[case(9, 9)]
    #[case(10, 9)]
    #[case(u64::MAX, 9)]
    fn test_extend_clamps(#[case] requested: u64, #[case] expected: i64) {
        let log = log(10);
        let mut finalized = FinalizedDeposits::<DepositTrie>::new(DEPTH).unwrap();

        assert_eq!(finalized.extend(&log, requested), Ok(true));
        assert_eq!(finalized.merkle_trie_index(), expected);
        assert_eq!(finalized.trie().item_count(), expected as usize + 1);
        assert_eq!(
            finalized.deposit_root(),
            batch_root(&log, expected as usize + 1)
        );
    }

    #[test]
    fn test_snapshot_is_not_mutated() {
        let log = log(6);
        let mut finalized = FinalizedDeposits::<DepositTrie>::new(DEPTH).unwrap();
        finalized.extend(&log, 2).unwrap();

        let snapshot = finalized.clone();
        finalized.extend(&log, 5).unwrap();

        assert_eq!(snapshot.merkle_trie_index(), 2);
        assert_eq!(snapshot.trie().item_count(), 3);
        assert_eq!(snapshot.deposit_root(), batch_root(&log, 3));
        assert_eq!(finalized.deposit_root(), batch_root(&log, 6));
    }

    #[test]
    fn test_failed_extension_leaves_no_trace() {
        let log = log(5);
        let mut finalized = FinalizedDeposits::<DepositTrie>::new(2).unwrap();

        assert_eq!(
            finalized.extend(&log, 4),
            Err(DepositCacheError::Merkle(MerkleError::TrieFull {
                position: 4,
                capacity: 4
            }))
        );
        assert_eq!(finalized.merkle_trie_index(), EMPTY_MERKLE_TRIE_INDEX);
        assert_eq!(finalized.trie().item_count(), 0);

        assert_eq!(finalized.extend(&log, 3), Ok(true));
        assert_eq!(finalized.merkle_trie_index(), 3);
        assert_eq!(finalized.trie().item_count(), 4);
    }

    #[test]
    fn test_lower_request_is_noop() {
        let log = log(6);
        let mut finalized = FinalizedDeposits::<DepositTrie>::new(DEPTH).unwrap();
        finalized.extend(&log, 4).unwrap();
        let root = finalized.deposit_root();

        assert_eq!(finalized.extend(&log, 4), Ok(false));
        assert_eq!(finalized.extend(&log, 1), Ok(false));
        assert_eq!(finalized.merkle_trie_index(), 4);
        assert_eq!(finalized.deposit_root(), root);
    }
}
