use crate::error::MerkleError;
use crate::hash::{sha256, zero_leaf};
use crate::types::Leaf;

/// Smallest power of two >= `n`, with `next_pow2(0) = 1`: a tree of
/// capacity zero still has a defined (all-zero) root.
pub fn next_pow2(n: usize) -> usize {
    n.next_power_of_two()
}

/// Hash two nodes: H(left || right). The same function covers internal tree
/// nodes and the top-level field combination; no domain tag is mixed in.
pub fn combine(left: &Leaf, right: &Leaf) -> Leaf {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left);
    buf[32..].copy_from_slice(right);
    sha256(&buf)
}

/// Merkle root over `leaves`, zero-padded to `next_pow2(capacity)` slots.
///
/// The tree is always padded to the capacity, independent of how many
/// leaves were actually supplied; supplying more than `capacity` leaves is
/// a fatal error. Degenerate cases fall out of the uniform fold:
/// - no leaves, capacity 0: the all-zero root, no hashing;
/// - one leaf, capacity 1: that leaf unhashed;
/// - two leaves, capacity 2: one `combine`.
pub fn merkle_root(leaves: &[Leaf], capacity: usize) -> Result<Leaf, MerkleError> {
    if leaves.len() > capacity {
        return Err(MerkleError::CapacityExceeded {
            supplied: leaves.len(),
            capacity,
        });
    }
    if capacity == 0 {
        return Ok(zero_leaf());
    }

    let width = next_pow2(capacity);
    let mut nodes = vec![zero_leaf(); 2 * width];
    nodes[width..width + leaves.len()].copy_from_slice(leaves);
    for i in (1..width).rev() {
        nodes[i] = combine(&nodes[2 * i], &nodes[2 * i + 1]);
    }
    Ok(nodes[1])
}
