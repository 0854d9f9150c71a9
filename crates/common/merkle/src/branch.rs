use alloy_primitives::B256;
use ethereum_hashing::hash32_concat;

/// 32-byte little-endian encoding of `length`, the last element of a deposit proof.
pub fn length_chunk(length: u64) -> B256 {
    let mut chunk = [0u8; 32];
    chunk[..8].copy_from_slice(&length.to_le_bytes());
    B256::from(chunk)
}

/// Check if ``leaf`` at ``index`` verifies against the Merkle ``root`` and ``branch``.
pub fn is_valid_merkle_branch(
    leaf: B256,
    branch: &[B256],
    depth: u64,
    index: u64,
    root: B256,
) -> bool {
    if depth > u64::BITS as u64 || (branch.len() as u64) < depth {
        return false;
    }

    let mut value = leaf;
    for (i, node) in branch.iter().take(depth as usize).enumerate() {
        let hash = if (index >> i) & 1 == 1 {
            hash32_concat(node.as_slice(), value.as_slice())
        } else {
            hash32_concat(value.as_slice(), node.as_slice())
        };
        value = B256::from(hash);
    }
    value == root
}
