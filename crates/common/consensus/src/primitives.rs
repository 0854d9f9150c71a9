use ssz_types::typenum::{Prod, U32, U33, U5, U81, U919};

pub type DepositIndex = u64; // position in the deposit contract tree
pub type ExecutionBlockNumber = u64; // execution layer block height
pub type Gwei = u64; // amount in gwei

pub type PubKeyLength = Prod<U81, U32>; // 2592 bytes
pub type SignatureLength = Prod<U5, U919>; // 4595 bytes

/// Upper bound of a deposit proof: one sibling per tree level plus the length mix-in.
pub type DepositProofLength = U33;
