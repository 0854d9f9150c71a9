use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Eth1Data {
    pub deposit_root: B256,
    pub deposit_count: u64,
    pub block_hash: B256,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ssz::{Decode, Encode};

    use super::*;

    #[rstest::rstest]
    #[case(
        "0xe7e148b0b703ba99e62959bb3e159163c6adf6fa5095216464803d26c2b9513e",
        4235382657690888612,
        "0x2710d0d9c4143dfe3861fd1223b7879fae41c6027bf2565277c526f49826824b",
        "0xca3459995a3633f69098d836387f1d428504cac0ee546aa904c1801c68f0dd9f"
    )]
    #[case(
        "0xe43140d8009c5efe0dab316170952d353671c4965e9d3d7a7efc89880a59089a",
        6311449966540022714,
        "0x993e65dd31004394269e7d41ad3e83213231cf1bc2a1ae246d128cbb12495fab",
        "0x41928cbb12b803c8286f2f5e83d0639aa869a83d46a97060e5e9e28f51ac04b2"
    )]
    fn test_eth_1_data(
        #[case] deposit_root: &str,
        #[case] deposit_count: u64,
        #[case] block_hash: &str,
        #[case] hash_root: &str,
    ) {
        use tree_hash::TreeHash;

        let eth_1_data = Eth1Data {
            deposit_root: B256::from_str(deposit_root).unwrap(),
            deposit_count,
            block_hash: B256::from_str(block_hash).unwrap(),
        };

        let ssz = eth_1_data.as_ssz_bytes();
        assert_eq!(ssz.len(), 72);
        assert_eq!(eth_1_data, Eth1Data::from_ssz_bytes(&ssz).unwrap());
        assert_eq!(
            B256::from_str(hash_root).unwrap(),
            eth_1_data.tree_hash_root()
        );
    }
}
