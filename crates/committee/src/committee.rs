use crate::error::MerkleError;
use crate::hash::hash_leaf;
use crate::merkle::{combine, merkle_root};
use crate::types::{CommitteeRecord, Leaf, Pubkey, Root, COMMITTEE_CAPACITY, PUBKEY_LEN};

/// Root of the pubkey vector field: leaf-hash every key in index order,
/// then Merkleize at the fixed capacity of 512. Only the tree is padded
/// with zero leaves; the pubkey count itself is taken as supplied.
pub fn pubkeys_root(pubkeys: &[Pubkey]) -> Result<Leaf, MerkleError> {
    if pubkeys.len() > COMMITTEE_CAPACITY {
        return Err(MerkleError::CapacityExceeded {
            supplied: pubkeys.len(),
            capacity: COMMITTEE_CAPACITY,
        });
    }
    let mut leaves = Vec::with_capacity(pubkeys.len());
    for pk in pubkeys {
        leaves.push(hash_leaf(pk.as_bytes(), PUBKEY_LEN)?);
    }
    merkle_root(&leaves, COMMITTEE_CAPACITY)
}

/// Commitment over the whole record:
/// H(pubkeys_root || leaf(aggregate_pubkey)).
///
/// The vector field's root is always the left operand and the scalar
/// field's leaf the right one; the order follows field declaration order
/// and must not be swapped. Pure function; any wrong-width value or
/// over-capacity pubkey count aborts with no partial result.
pub fn committee_root(record: &CommitteeRecord) -> Result<Root, MerkleError> {
    let vector_root = pubkeys_root(&record.pubkeys)?;
    let agg_leaf = hash_leaf(record.aggregate_pubkey.as_bytes(), PUBKEY_LEN)?;
    Ok(Root(combine(&vector_root, &agg_leaf)))
}
