pub mod committee;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod types;

pub use committee::{committee_root, pubkeys_root};
pub use error::MerkleError;
pub use hash::{hash_leaf, sha256, zero_leaf};
pub use merkle::{combine, merkle_root, next_pow2};
pub use types::{
    CommitteeRecord, Leaf, Pubkey, Root, COMMITTEE_CAPACITY, LEAF_BLOCK_LEN, PUBKEY_LEN,
};
