use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::VariableList;
use tree_hash_derive::TreeHash;

use crate::{deposit_data::DepositData, primitives::DepositProofLength};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Deposit {
    /// Merkle branch of `data` against the deposit root, empty once pruned
    pub proof: VariableList<B256, DepositProofLength>,
    pub data: DepositData,
}

impl Deposit {
    pub fn has_proof(&self) -> bool {
        !self.proof.is_empty()
    }
}
