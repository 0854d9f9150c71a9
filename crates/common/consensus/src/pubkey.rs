use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{serde_utils::hex_fixed_vec, FixedVector};
use tree_hash_derive::TreeHash;

use crate::primitives::PubKeyLength;

/// Post-quantum validator public key.
#[derive(
    Debug, Default, PartialEq, Eq, Hash, Clone, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
#[serde(transparent)]
pub struct PubKey {
    #[serde(with = "hex_fixed_vec")]
    pub inner: FixedVector<u8, PubKeyLength>,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::hex;

    use super::*;
    use crate::constants::PUBKEY_LENGTH;

    #[test]
    fn test_pubkey_hex_serde() {
        let pubkey = PubKey {
            inner: FixedVector::from(vec![0xab; PUBKEY_LENGTH]),
        };

        let yaml = serde_yaml::to_string(&pubkey).unwrap();
        assert!(yaml
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .starts_with("0xabab"));

        let decoded: PubKey = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(decoded, pubkey);
        assert_eq!(decoded.inner.len(), PUBKEY_LENGTH);
    }

    #[test]
    fn test_pubkey_rejects_wrong_length() {
        let short = format!("\"0x{}\"", hex::encode([0x01u8; 48]));
        assert!(serde_yaml::from_str::<PubKey>(&short).is_err());
    }
}
