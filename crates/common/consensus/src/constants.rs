/// Depth of the deposit contract's incremental Merkle tree.
pub const DEPOSIT_CONTRACT_TREE_DEPTH: u64 = 32;

/// Length in bytes of a post-quantum validator public key.
pub const PUBKEY_LENGTH: usize = 2592;

/// Length in bytes of a post-quantum deposit signature.
pub const SIGNATURE_LENGTH: usize = 4595;
