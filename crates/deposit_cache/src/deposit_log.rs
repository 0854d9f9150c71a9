use alloy_primitives::{map::HashMap, B256};
use ream_consensus::{
    deposit::Deposit,
    primitives::{DepositIndex, ExecutionBlockNumber},
    pubkey::PubKey,
};

use crate::{deposit_record::DepositRecord, error::DepositCacheError};

/// Deposits in contract order, indexed by the first public key they carry.
///
/// `deposits[i].index == i` holds for everything added through [`DepositLog::insert`]. Heights
/// never decrease with the index, which lets height lookups binary search.
#[derive(Debug, Default, Clone)]
pub struct DepositLog {
    deposits: Vec<DepositRecord>,
    pubkey_index: HashMap<PubKey, usize>,
}

impl DepositLog {
    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }

    pub fn records(&self) -> &[DepositRecord] {
        &self.deposits
    }

    /// Appends `record` if it carries the next expected index, leaving the log untouched
    /// otherwise.
    pub fn insert(&mut self, record: DepositRecord) -> Result<(), DepositCacheError> {
        let expected = self.deposits.len() as DepositIndex;
        if record.index != expected {
            return Err(DepositCacheError::UnexpectedIndex {
                expected,
                actual: record.index,
            });
        }

        self.push(record);
        Ok(())
    }

    /// Appends records already known to be consistent, such as a persisted log.
    pub fn extend_unchecked(&mut self, records: impl IntoIterator<Item = DepositRecord>) {
        for record in records {
            self.push(record);
        }
    }

    fn push(&mut self, record: DepositRecord) {
        let position = self.deposits.len();
        // First deposit for a key wins, later top-ups never replace it.
        self.pubkey_index
            .entry(record.deposit.data.pubkey.clone())
            .or_insert(position);
        self.deposits.push(record);
    }

    pub fn all_deposits(&self, before_height: Option<ExecutionBlockNumber>) -> Vec<Deposit> {
        self.deposits
            .iter()
            .filter(|record| within_height(record, before_height))
            .map(|record| record.deposit.clone())
            .collect()
    }

    pub fn deposit_by_pubkey(&self, pubkey: &PubKey) -> Option<(Deposit, ExecutionBlockNumber)> {
        self.pubkey_index
            .get(pubkey)
            .and_then(|position| self.deposits.get(*position))
            .map(|record| (record.deposit.clone(), record.eth1_block_height))
    }

    /// Number of deposits seen up to `height` and the contract root as of the last of them.
    pub fn deposits_number_and_root_at_height(&self, height: ExecutionBlockNumber) -> (u64, B256) {
        let count = self
            .deposits
            .partition_point(|record| record.eth1_block_height <= height);

        match count.checked_sub(1).map(|last| &self.deposits[last]) {
            Some(record) => (record.index + 1, record.deposit_root),
            None => (0, B256::ZERO),
        }
    }

    pub fn non_finalized_deposits(
        &self,
        last_finalized_index: i64,
        before_height: Option<ExecutionBlockNumber>,
    ) -> Vec<Deposit> {
        self.deposits
            .iter()
            .filter(|record| {
                last_finalized_index < 0 || record.index > last_finalized_index as DepositIndex
            })
            .filter(|record| within_height(record, before_height))
            .map(|record| record.deposit.clone())
            .collect()
    }

    /// Clears the proofs of every deposit up to `until_index`, clamped to the log.
    ///
    /// Returns how many records were pruned.
    pub fn prune_proofs(&mut self, until_index: DepositIndex) -> usize {
        let Some(last) = self.deposits.len().checked_sub(1) else {
            return 0;
        };
        let until = usize::try_from(until_index).map_or(last, |index| index.min(last));

        for record in &mut self.deposits[..=until] {
            record.deposit.proof = Default::default();
        }

        until + 1
    }
}

fn within_height(record: &DepositRecord, before_height: Option<ExecutionBlockNumber>) -> bool {
    before_height.map_or(true, |height| record.eth1_block_height <= height)
}
