//! Integration tests for commitment construction: determinism and fixed
//! reference vectors.
//!
//! The reference digests below were computed independently with a separate
//! Keccak-256 implementation so the leaf rule, the sorted-pair rule, and
//! the odd-carry rule are pinned and cannot drift with refactors.

use claimtree::entitlement::Entitlement;
use claimtree::tree::{verify, MerkleTree};
use claimtree::types::parse_digest;

fn records(pairs: &[(&str, &str)]) -> Vec<Entitlement> {
    pairs
        .iter()
        .map(|(a, m)| Entitlement::new(*a, *m))
        .collect()
}

#[test]
fn test_two_record_reference_root() {
    let recs = records(&[("addr1", "100"), ("addr2", "50")]);
    let tree = MerkleTree::build(&recs).unwrap();
    assert_eq!(
        tree.root_hex(),
        "0x2fd0f865d297bee66be8abbd549e9f490b25c3455c2f5594c195b1ab92dda9a6"
    );
}

#[test]
fn test_two_record_proof_is_sibling_leaf() {
    // With two leaves, the proof for one record is exactly the other
    // record's leaf digest.
    let recs = records(&[("addr1", "100"), ("addr2", "50")]);
    let tree = MerkleTree::build(&recs).unwrap();

    let proof = tree.proof(&recs[0]).unwrap();
    let leaf2 =
        parse_digest("0xf1170464935c842f8e8de74e7215ebc5f398d81355fe045d680df6b2dc7ff7a6")
            .unwrap();
    assert_eq!(proof, vec![leaf2]);

    assert!(verify(&tree.root(), &proof, &recs[0]));
    assert!(!verify(
        &tree.root(),
        &proof,
        &Entitlement::new("addr1", "999")
    ));
}

#[test]
fn test_three_record_odd_carry_reference_root() {
    // Three leaves exercise the odd-carry rule: the unpaired third leaf is
    // promoted unchanged and hashed with the first pair's digest.
    let recs = records(&[("addr1", "100"), ("addr2", "200"), ("addr3", "300")]);
    let tree = MerkleTree::build(&recs).unwrap();
    assert_eq!(
        tree.root_hex(),
        "0xa87c2d5fafa6c132b1db018a736aaa3aeba3a010e49851e8c2d6a5ec69c7e84e"
    );
}

#[test]
fn test_three_record_proof_lengths() {
    // The carried leaf pairs only at the top level, so its proof is one
    // element; the two paired leaves need two.
    let recs = records(&[("addr1", "100"), ("addr2", "200"), ("addr3", "300")]);
    let tree = MerkleTree::build(&recs).unwrap();

    let mut lengths: Vec<usize> = recs
        .iter()
        .map(|r| tree.proof(r).unwrap().len())
        .collect();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![1, 2, 2]);

    for record in &recs {
        let proof = tree.proof(record).unwrap();
        assert!(verify(&tree.root(), &proof, record));
    }
}

#[test]
fn test_five_record_reference_root() {
    let recs = records(&[
        ("addr1", "10"),
        ("addr2", "20"),
        ("addr3", "30"),
        ("addr4", "40"),
        ("addr5", "50"),
    ]);
    let tree = MerkleTree::build(&recs).unwrap();
    assert_eq!(
        tree.root_hex(),
        "0xe12b0a474dcfc2dd5de3e81024f09cca666d9d9f01ed1faaaf49f290ed18ca64"
    );
}

#[test]
fn test_root_independent_of_record_order() {
    let forward = records(&[
        ("addr1", "10"),
        ("addr2", "20"),
        ("addr3", "30"),
        ("addr4", "40"),
        ("addr5", "50"),
    ]);
    let mut shuffled = forward.clone();
    shuffled.rotate_left(2);
    shuffled.swap(0, 3);

    let a = MerkleTree::build(&forward).unwrap();
    let b = MerkleTree::build(&shuffled).unwrap();
    assert_eq!(a.root(), b.root());
}

#[test]
fn test_single_record_root_reference() {
    let recs = records(&[("solo", "42")]);
    let tree = MerkleTree::build(&recs).unwrap();
    assert_eq!(
        tree.root_hex(),
        "0x2fd6dfdb6c77d81f856238704fabf70f1fb2d0f57dbee06df8fa7ee584135434"
    );
    assert_eq!(tree.proof(&recs[0]).unwrap(), Vec::<claimtree::types::Hash>::new());
}

#[test]
fn test_empty_input_rejected() {
    assert!(MerkleTree::build(&[]).is_err());
}
