use alloy_primitives::B256;
use ethereum_hashing::{hash32_concat, ZERO_HASHES, ZERO_HASHES_MAX_INDEX};
use tree_hash::mix_in_length;

use crate::{accumulator::MerkleAccumulator, branch::length_chunk, error::MerkleError};

pub const MAX_TREE_DEPTH: usize = ZERO_HASHES_MAX_INDEX;

/// Right-sparse Merkle trie of fixed depth.
///
/// Only the populated prefix of every layer is stored; missing siblings are the zero hash of
/// their level. Inserting a leaf rehashes a single path, so the deposit contract tree can be
/// extended one leaf at a time without rebuilding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositTrie {
    depth: usize,
    /// `layers[0]` holds the leaves and `layers[depth]` the root once the trie is non-empty.
    layers: Vec<Vec<B256>>,
}

impl DepositTrie {
    pub fn new(depth: usize) -> Result<Self, MerkleError> {
        Self::validate_depth(depth)?;
        Ok(Self {
            depth,
            layers: vec![vec![]; depth + 1],
        })
    }

    pub fn capacity(&self) -> u64 {
        1 << self.depth
    }

    /// Root of the tree without the item count mixed in.
    pub fn root(&self) -> B256 {
        self.layers[self.depth]
            .first()
            .copied()
            .unwrap_or_else(|| zero_hash(self.depth))
    }

    /// Return the branch proving the leaf at `index` against [`MerkleAccumulator::hash_tree_root`].
    ///
    /// The branch is bottom-up and carries `depth + 1` nodes, the last one being the item count.
    pub fn merkle_proof(&self, index: usize) -> Result<Vec<B256>, MerkleError> {
        let count = self.item_count();
        if index >= count {
            return Err(MerkleError::IndexOutOfRange { index, count });
        }

        let mut proof = Vec::with_capacity(self.depth + 1);
        let mut position = index;
        for level in 0..self.depth {
            proof.push(self.node_or_zero(level, position ^ 1));
            position /= 2;
        }
        proof.push(length_chunk(count as u64));

        Ok(proof)
    }

    fn validate_depth(depth: usize) -> Result<(), MerkleError> {
        if depth > MAX_TREE_DEPTH {
            return Err(MerkleError::InvalidDepth {
                depth,
                max: MAX_TREE_DEPTH,
            });
        }
        Ok(())
    }

    fn node_or_zero(&self, level: usize, position: usize) -> B256 {
        self.layers[level]
            .get(position)
            .copied()
            .unwrap_or_else(|| zero_hash(level))
    }
}

impl MerkleAccumulator for DepositTrie {
    fn build_from_leaves(leaves: &[B256], depth: usize) -> Result<Self, MerkleError> {
        let mut trie = Self::new(depth)?;
        if leaves.len() as u64 > trie.capacity() {
            return Err(MerkleError::TooManyLeaves {
                count: leaves.len(),
                capacity: trie.capacity(),
            });
        }

        trie.layers[0] = leaves.to_vec();
        for level in 0..depth {
            let parents = trie.layers[level]
                .chunks(2)
                .map(|pair| {
                    let right = pair.get(1).copied().unwrap_or_else(|| zero_hash(level));
                    hash_pair(pair[0], right)
                })
                .collect();
            trie.layers[level + 1] = parents;
        }

        Ok(trie)
    }

    fn insert(&mut self, leaf: B256, position: usize) -> Result<(), MerkleError> {
        let count = self.item_count();
        if position > count {
            return Err(MerkleError::NonSequentialPosition { position, count });
        }
        if position as u64 >= self.capacity() {
            return Err(MerkleError::TrieFull {
                position,
                capacity: self.capacity(),
            });
        }

        let mut index = position;
        let mut node = leaf;
        for level in 0..self.depth {
            set_node(&mut self.layers[level], index, node);
            let sibling = self.node_or_zero(level, index ^ 1);
            node = if index % 2 == 0 {
                hash_pair(node, sibling)
            } else {
                hash_pair(sibling, node)
            };
            index /= 2;
        }
        set_node(&mut self.layers[self.depth], index, node);

        Ok(())
    }

    fn hash_tree_root(&self) -> B256 {
        mix_in_length(&self.root(), self.item_count())
    }

    fn item_count(&self) -> usize {
        self.layers[0].len()
    }
}

fn zero_hash(level: usize) -> B256 {
    B256::from(ZERO_HASHES[level])
}

fn hash_pair(left: B256, right: B256) -> B256 {
    B256::from(hash32_concat(left.as_slice(), right.as_slice()))
}

// Positions only ever grow by one past the populated prefix of a layer.
fn set_node(layer: &mut Vec<B256>, index: usize, node: B256) {
    if index == layer.len() {
        layer.push(node);
    } else {
        layer[index] = node;
    }
}
