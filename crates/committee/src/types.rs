use std::fmt;

use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

use crate::error::MerkleError;

/// A 32-byte Merkle node value. Leaves have no identity beyond their byte
/// content; two leaves with equal bytes are interchangeable.
pub type Leaf = [u8; 32];

/// Width of a compressed public key in bytes.
pub const PUBKEY_LEN: usize = 48;

/// Fixed capacity of the committee pubkey vector. A config constant of the
/// scheme, never derived from input.
pub const COMMITTEE_CAPACITY: usize = 512;

/// Raw field values are right-padded to this block size before leaf hashing.
pub const LEAF_BLOCK_LEN: usize = 64;

/// Compressed public key, treated as an opaque fixed-width byte value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pubkey(#[serde(with = "BigArray")] pub [u8; PUBKEY_LEN]);

impl Pubkey {
    /// Parse from raw bytes; the input must be exactly 48 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MerkleError> {
        let raw: [u8; PUBKEY_LEN] =
            bytes
                .try_into()
                .map_err(|_| MerkleError::InvalidFieldLength {
                    expected: PUBKEY_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Pubkey {
    type Error = MerkleError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// Committee record to commit to: member pubkeys in index order (order is
/// part of the commitment) plus the aggregate pubkey. Built transiently
/// right before a root computation, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitteeRecord {
    pub pubkeys: Vec<Pubkey>,
    pub aggregate_pubkey: Pubkey,
}

/// The final 32-byte commitment over a [`CommitteeRecord`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Root(pub [u8; 32]);

impl Root {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Bare lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// `0x`-prefixed lowercase hex. Both conventions appear among callers
    /// that persist the root.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_prefixed())
    }
}
