//! Merkle root calculation
//!
//! Bitcoin-style binary tree: leaves are transaction IDs, inner nodes are
//! double SHA-256 of the concatenated children, and an odd node at any level
//! is paired with itself.

use super::hash::hash256;
use crate::core::Hash256;

/// Calculate the merkle root from a list of transaction hashes
///
/// An empty list yields the zero hash; a single hash is its own root.
pub fn calculate_merkle_root(hashes: &[Hash256]) -> Hash256 {
    if hashes.is_empty() {
        return Hash256::ZERO;
    }

    let mut current_level: Vec<Hash256> = hashes.to_vec();

    while current_level.len() > 1 {
        let mut next_level = Vec::with_capacity((current_level.len() + 1) / 2);

        for chunk in current_level.chunks(2) {
            let right = chunk.get(1).unwrap_or(&chunk[0]);
            let mut data = [0u8; 64];
            data[..32].copy_from_slice(chunk[0].as_bytes());
            data[32..].copy_from_slice(right.as_bytes());
            next_level.push(hash256(&data));
        }

        current_level = next_level;
    }

    current_level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(tag: &[u8]) -> Hash256 {
        hash256(tag)
    }

    #[test]
    fn test_merkle_root_single() {
        let hashes = vec![leaf(b"tx1")];
        assert_eq!(calculate_merkle_root(&hashes), hashes[0]);
    }

    #[test]
    fn test_merkle_root_two() {
        let h1 = leaf(b"tx1");
        let h2 = leaf(b"tx2");

        let mut data = h1.as_bytes().to_vec();
        data.extend_from_slice(h2.as_bytes());

        assert_eq!(calculate_merkle_root(&[h1, h2]), hash256(&data));
    }

    #[test]
    fn test_merkle_root_odd_duplicates_last() {
        let (h1, h2, h3) = (leaf(b"tx1"), leaf(b"tx2"), leaf(b"tx3"));
        assert_eq!(
            calculate_merkle_root(&[h1, h2, h3]),
            calculate_merkle_root(&[h1, h2, h3, h3])
        );
    }

    #[test]
    fn test_empty_merkle_root() {
        assert_eq!(calculate_merkle_root(&[]), Hash256::ZERO);
    }
}
