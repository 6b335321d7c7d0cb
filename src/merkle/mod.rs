//! Binary Merkle commitments over trace columns.
//!
//! The prover commits the full execution trace as an ordered sequence of
//! little-endian leaf encodings, then opens individual positions on demand.
//! Verification is a pure function over the root, the claimed leaf bytes and
//! the side-tagged sibling path; it never touches the original tree.

pub mod proof;
pub mod tree;
pub mod types;

pub use proof::verify_path;
pub use tree::MerkleTree;
pub use types::{Leaf, MerkleError, MerklePath, PathNode, SiblingSide};
