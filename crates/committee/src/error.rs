use thiserror::Error;

/// Failures raised while Merkleizing a committee record.
///
/// Both variants are fatal: the whole root computation aborts and no
/// partial root is ever returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MerkleError {
    /// A raw value's byte length does not match its declared field width.
    #[error("invalid field length: expected {expected} bytes, got {actual}")]
    InvalidFieldLength { expected: usize, actual: usize },

    /// More leaves supplied than the declared vector capacity.
    #[error("capacity exceeded: {supplied} leaves > capacity {capacity}")]
    CapacityExceeded { supplied: usize, capacity: usize },
}
