pub mod accumulator;
pub mod branch;
pub mod deposit_trie;
pub mod error;

pub use accumulator::MerkleAccumulator;
pub use branch::{is_valid_merkle_branch, length_chunk};
pub use deposit_trie::DepositTrie;
pub use error::MerkleError;
