use proptest::prelude::*;
use zklogin_stark::hash::Hash;
use zklogin_stark::merkle::{verify_path, Leaf, MerkleTree};

fn make_leaves(count: u32) -> Vec<Leaf> {
    (0..count as u64)
        .map(|value| Leaf::new((value * value + 1).to_le_bytes().to_vec()))
        .collect()
}

#[test]
fn roundtrip_every_index_including_odd_widths() {
    for count in [1u32, 2, 3, 5, 6, 7, 8, 9, 15, 16, 17] {
        let leaves = make_leaves(count);
        let tree = MerkleTree::commit(&leaves).expect("commit");
        let root = tree.root();
        for (index, leaf) in leaves.iter().enumerate() {
            let path = tree.open(index as u32).expect("open");
            assert!(
                verify_path(leaf.as_bytes(), index as u32, count, &path, &root),
                "count {} index {}",
                count,
                index
            );
        }
    }
}

#[test]
fn tampered_root_rejected() {
    let leaves = make_leaves(8);
    let tree = MerkleTree::commit(&leaves).expect("commit");
    let path = tree.open(5).expect("open");

    let mut bytes = tree.root().into_bytes();
    bytes[0] ^= 1;
    let tampered = Hash::from_bytes(bytes);
    assert!(!verify_path(leaves[5].as_bytes(), 5, 8, &path, &tampered));
}

#[test]
fn tampered_leaf_rejected() {
    let leaves = make_leaves(8);
    let tree = MerkleTree::commit(&leaves).expect("commit");
    let root = tree.root();
    let path = tree.open(5).expect("open");

    let mut bytes = leaves[5].as_bytes().to_vec();
    bytes[0] ^= 1;
    assert!(!verify_path(&bytes, 5, 8, &path, &root));
}

#[test]
fn tampering_any_sibling_byte_rejected() {
    let leaves = make_leaves(13);
    let tree = MerkleTree::commit(&leaves).expect("commit");
    let root = tree.root();
    let path = tree.open(6).expect("open");

    for level in 0..path.nodes.len() {
        for byte in 0..32 {
            let mut tampered = path.clone();
            let mut digest = tampered.nodes[level].digest.into_bytes();
            digest[byte] ^= 0x80;
            tampered.nodes[level].digest = Hash::from_bytes(digest);
            assert!(
                !verify_path(leaves[6].as_bytes(), 6, 13, &tampered, &root),
                "level {} byte {}",
                level,
                byte
            );
        }
    }
}

#[test]
fn structurally_invalid_paths_rejected_not_crashed() {
    let leaves = make_leaves(8);
    let tree = MerkleTree::commit(&leaves).expect("commit");
    let root = tree.root();

    let mut truncated = tree.open(2).expect("open");
    truncated.nodes.pop();
    assert!(!verify_path(leaves[2].as_bytes(), 2, 8, &truncated, &root));

    let mut padded = tree.open(2).expect("open");
    let extra = padded.nodes[0].clone();
    padded.nodes.push(extra);
    assert!(!verify_path(leaves[2].as_bytes(), 2, 8, &padded, &root));

    let path = tree.open(2).expect("open");
    assert!(!verify_path(leaves[2].as_bytes(), 9, 8, &path, &root));
    assert!(!verify_path(leaves[2].as_bytes(), 2, 0, &path, &root));
}

proptest! {
    #[test]
    fn roundtrip_random_shapes(count in 1u32..64, seed in any::<u64>()) {
        let leaves: Vec<Leaf> = (0..count as u64)
            .map(|value| Leaf::new(value.wrapping_mul(seed | 1).to_le_bytes().to_vec()))
            .collect();
        let tree = MerkleTree::commit(&leaves).expect("commit");
        let root = tree.root();
        let index = (seed % count as u64) as u32;
        let path = tree.open(index).expect("open");
        prop_assert!(verify_path(
            leaves[index as usize].as_bytes(),
            index,
            count,
            &path,
            &root
        ));
    }
}
