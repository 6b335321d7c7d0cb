use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hash::Hash;

/// Canonical leaf representation – little-endian field element bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    bytes: Vec<u8>,
}

impl Leaf {
    /// Creates a leaf from already ordered bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns a view of the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the leaf and returns its byte payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Position of a sibling digest relative to the node being folded upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiblingSide {
    /// The sibling is hashed before the running digest.
    Left,
    /// The sibling is hashed after the running digest.
    Right,
}

/// One level of a Merkle inclusion path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    pub side: SiblingSide,
    pub digest: Hash,
}

/// Side-tagged sibling path from one leaf to the committed root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerklePath {
    pub index: u32,
    pub nodes: Vec<PathNode>,
}

/// Errors emitted by the Merkle layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerkleError {
    /// A commitment over an empty leaf sequence was requested.
    EmptyLeaves,
    /// The opening index does not address a leaf.
    IndexOutOfRange { index: u32, max: u32 },
    /// The internal level structure is inconsistent; indicates a logic bug.
    InvalidTreeState { reason: &'static str },
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::EmptyLeaves => write!(f, "no leaves supplied"),
            MerkleError::IndexOutOfRange { index, max } => {
                write!(f, "index {} out of range (max {})", index, max)
            }
            MerkleError::InvalidTreeState { reason } => {
                write!(f, "invalid tree state: {}", reason)
            }
        }
    }
}

impl std::error::Error for MerkleError {}
