use crate::hash::Hash;

use super::tree::{expected_path_len, hash_leaf, hash_nodes};
use super::types::{MerklePath, SiblingSide};

/// Recomputes the root from one leaf and its sibling path.
///
/// This is the verifier-side half of the commitment scheme: it needs no
/// access to the original tree and treats every structural defect (wrong
/// path length, mismatched index) as a plain rejection.  It returns `false`
/// rather than failing, since malformed openings are attacker-reachable
/// input.
pub fn verify_path(
    leaf_bytes: &[u8],
    index: u32,
    leaf_count: u32,
    path: &MerklePath,
    root: &Hash,
) -> bool {
    if leaf_count == 0 || index >= leaf_count {
        return false;
    }
    if path.index != index {
        return false;
    }
    if path.nodes.len() != expected_path_len(leaf_count) {
        return false;
    }

    let mut digest = hash_leaf(leaf_bytes);
    let mut position = index;
    for node in &path.nodes {
        // The side flag must agree with the position the node claims to fold.
        let expected_side = if position % 2 == 0 {
            SiblingSide::Right
        } else {
            SiblingSide::Left
        };
        if node.side != expected_side {
            return false;
        }
        digest = match node.side {
            SiblingSide::Left => hash_nodes(&node.digest, &digest),
            SiblingSide::Right => hash_nodes(&digest, &node.digest),
        };
        position /= 2;
    }
    digest == *root
}

#[cfg(test)]
mod tests {
    use super::super::tree::MerkleTree;
    use super::super::types::Leaf;
    use super::*;

    fn committed(count: u64) -> (Vec<Leaf>, MerkleTree) {
        let leaves: Vec<Leaf> = (0..count)
            .map(|value| Leaf::new(value.to_le_bytes().to_vec()))
            .collect();
        let tree = MerkleTree::commit(&leaves).expect("commit");
        (leaves, tree)
    }

    #[test]
    fn roundtrip_all_indices_ok() {
        let (leaves, tree) = committed(7);
        let root = tree.root();
        for (index, leaf) in leaves.iter().enumerate() {
            let path = tree.open(index as u32).expect("open");
            assert!(verify_path(leaf.as_bytes(), index as u32, 7, &path, &root));
        }
    }

    #[test]
    fn wrong_index_rejected() {
        let (leaves, tree) = committed(8);
        let root = tree.root();
        let path = tree.open(2).expect("open");
        assert!(!verify_path(leaves[2].as_bytes(), 3, 8, &path, &root));
    }

    #[test]
    fn truncated_path_rejected() {
        let (leaves, tree) = committed(8);
        let root = tree.root();
        let mut path = tree.open(2).expect("open");
        path.nodes.pop();
        assert!(!verify_path(leaves[2].as_bytes(), 2, 8, &path, &root));
    }

    #[test]
    fn flipped_side_rejected() {
        let (leaves, tree) = committed(8);
        let root = tree.root();
        let mut path = tree.open(2).expect("open");
        path.nodes[0].side = match path.nodes[0].side {
            SiblingSide::Left => SiblingSide::Right,
            SiblingSide::Right => SiblingSide::Left,
        };
        assert!(!verify_path(leaves[2].as_bytes(), 2, 8, &path, &root));
    }
}
