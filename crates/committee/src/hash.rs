use sha2::{Digest, Sha256};

use crate::error::MerkleError;
use crate::types::{Leaf, LEAF_BLOCK_LEN};

/// Hash bytes with SHA-256.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// The all-zero leaf. Used solely to pad unused tree slots, never as the
/// hash of real data.
pub fn zero_leaf() -> Leaf {
    [0u8; 32]
}

/// Leaf hash for a fixed-width field value: H(value || zero padding), where
/// the value is right-padded to the 64-byte protocol block.
///
/// The input must be exactly `width` bytes; a wrong-length value is a fatal
/// error, never silently truncated or padded.
pub fn hash_leaf(value: &[u8], width: usize) -> Result<Leaf, MerkleError> {
    debug_assert!(width <= LEAF_BLOCK_LEN);
    if value.len() != width {
        return Err(MerkleError::InvalidFieldLength {
            expected: width,
            actual: value.len(),
        });
    }
    let mut block = [0u8; LEAF_BLOCK_LEN];
    block[..value.len()].copy_from_slice(value);
    Ok(sha256(&block))
}
