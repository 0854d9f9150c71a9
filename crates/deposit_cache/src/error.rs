use ream_consensus::primitives::DepositIndex;
use ream_merkle::MerkleError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepositCacheError {
    #[error("expected deposit with index {expected}, received deposit with index {actual}")]
    UnexpectedIndex {
        expected: DepositIndex,
        actual: DepositIndex,
    },
    #[error("finalized deposit trie: {0}")]
    Merkle(#[from] MerkleError),
}
