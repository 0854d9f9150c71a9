use alloy_primitives::B256;
use ream_consensus::{
    deposit::Deposit,
    primitives::{DepositIndex, ExecutionBlockNumber},
};
use serde::{Deserialize, Serialize};

/// A deposit together with where it was observed on the execution layer.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct DepositRecord {
    pub deposit: Deposit,
    pub eth1_block_height: ExecutionBlockNumber,
    pub index: DepositIndex,

    /// Deposit contract root reported alongside this deposit, never recomputed locally
    pub deposit_root: B256,
}
