use alloy_primitives::B256;

use crate::error::MerkleError;

/// Incremental commitment over an ordered sequence of leaf hashes.
pub trait MerkleAccumulator: Clone + Send + Sync + Sized {
    /// Builds an accumulator of the given depth holding `leaves` in order.
    fn build_from_leaves(leaves: &[B256], depth: usize) -> Result<Self, MerkleError>;

    /// Places `leaf` at `position`, which must not be past the current item count.
    fn insert(&mut self, leaf: B256, position: usize) -> Result<(), MerkleError>;

    /// Root with the item count mixed in.
    fn hash_tree_root(&self) -> B256;

    fn item_count(&self) -> usize;
}
