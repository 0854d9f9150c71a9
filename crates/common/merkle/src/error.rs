use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MerkleError {
    #[error("trie depth {depth} exceeds the maximum supported depth {max}")]
    InvalidDepth { depth: usize, max: usize },
    #[error("cannot insert leaf at position {position}, trie holds {count} items")]
    NonSequentialPosition { position: usize, count: usize },
    #[error("cannot insert leaf at position {position} into trie with capacity {capacity}")]
    TrieFull { position: usize, capacity: u64 },
    #[error("{count} leaves do not fit into trie with capacity {capacity}")]
    TooManyLeaves { count: usize, capacity: u64 },
    #[error("no leaf at index {index}, trie holds {count} items")]
    IndexOutOfRange { index: usize, count: usize },
}
