use crate::hash::{Hash, Hasher};

use super::types::{Leaf, MerkleError, MerklePath, PathNode, SiblingSide};

/// Domain tag absorbed before every leaf payload.
pub(crate) const LEAF_DOMAIN: &[u8] = b"ZKL-MERKLE-LEAF";
/// Domain tag absorbed before every internal node pair.
pub(crate) const NODE_DOMAIN: &[u8] = b"ZKL-MERKLE-NODE";

/// Binary commitment tree with retained levels.
///
/// The tree keeps every level after [`MerkleTree::commit`] so openings can be
/// produced without rebuilding; it is scoped to a single proving call and
/// discarded once the proof is assembled.  A level of odd width duplicates
/// its trailing node, so the same leaf sequence always folds to the same
/// root.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    leaf_count: u32,
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Commits an ordered sequence of leaves.
    pub fn commit(leaves: &[Leaf]) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }
        let mut current: Vec<Hash> = leaves
            .iter()
            .map(|leaf| hash_leaf(leaf.as_bytes()))
            .collect();
        let mut levels = Vec::new();
        while current.len() > 1 {
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                let left = pair[0];
                // Odd-width levels duplicate the trailing node.
                let right = pair.get(1).copied().unwrap_or(left);
                next.push(hash_nodes(&left, &right));
            }
            levels.push(current);
            current = next;
        }
        levels.push(current);
        Ok(Self {
            leaf_count: leaves.len() as u32,
            levels,
        })
    }

    /// Returns the committed root digest.
    pub fn root(&self) -> Hash {
        // commit() guarantees a final single-digest level.
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }

    /// Returns the number of committed leaves.
    pub fn leaf_count(&self) -> u32 {
        self.leaf_count
    }

    /// Produces the side-tagged sibling path for one leaf position.
    pub fn open(&self, index: u32) -> Result<MerklePath, MerkleError> {
        if index >= self.leaf_count {
            return Err(MerkleError::IndexOutOfRange {
                index,
                max: self.leaf_count.saturating_sub(1),
            });
        }
        let mut nodes = Vec::with_capacity(self.levels.len().saturating_sub(1));
        let mut position = index as usize;
        for level in &self.levels[..self.levels.len().saturating_sub(1)] {
            let sibling_position = position ^ 1;
            let digest = match level.get(sibling_position) {
                Some(digest) => *digest,
                // The trailing node of an odd-width level pairs with itself.
                None => *level
                    .get(position)
                    .ok_or(MerkleError::InvalidTreeState {
                        reason: "opening position escaped its level",
                    })?,
            };
            let side = if position % 2 == 0 {
                SiblingSide::Right
            } else {
                SiblingSide::Left
            };
            nodes.push(PathNode { side, digest });
            position /= 2;
        }
        Ok(MerklePath { index, nodes })
    }
}

pub(crate) fn hash_leaf(bytes: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(LEAF_DOMAIN);
    hasher.update(bytes);
    hasher.finalize()
}

pub(crate) fn hash_nodes(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(NODE_DOMAIN);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    hasher.finalize()
}

/// Number of path nodes a well-formed opening carries for `leaf_count` leaves.
pub fn expected_path_len(leaf_count: u32) -> usize {
    let mut width = leaf_count as usize;
    let mut depth = 0;
    while width > 1 {
        width = width.div_ceil(2);
        depth += 1;
    }
    depth
}
