use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{serde_utils::hex_fixed_vec, FixedVector};
use tree_hash_derive::TreeHash;

use crate::primitives::SignatureLength;

/// Post-quantum signature over a deposit message.
#[derive(
    Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
#[serde(transparent)]
pub struct Signature {
    #[serde(with = "hex_fixed_vec")]
    pub signature: FixedVector<u8, SignatureLength>,
}
