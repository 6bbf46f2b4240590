//! Integration tests for proof verification: soundness, negative cases,
//! and tamper sensitivity.

use claimtree::entitlement::Entitlement;
use claimtree::tree::{verify, verify_hex, MerkleTree};

fn build(count: usize) -> (Vec<Entitlement>, MerkleTree) {
    let records: Vec<Entitlement> = (0..count)
        .map(|i| Entitlement::new(format!("terra1delegator{:03}", i), (i * 100 + 7).to_string()))
        .collect();
    let tree = MerkleTree::build(&records).unwrap();
    (records, tree)
}

#[test]
fn test_inclusion_soundness_various_sizes() {
    for count in [1usize, 2, 3, 4, 7, 16, 33] {
        let (records, tree) = build(count);
        let root = tree.root();
        for record in &records {
            let proof = tree.proof(record).unwrap();
            assert!(
                verify(&root, &proof, record),
                "proof failed for {} in a {}-leaf tree",
                record.address,
                count
            );
        }
    }
}

#[test]
fn test_absent_record_verifies_false() {
    let (records, tree) = build(8);
    let proof = tree.proof(&records[0]).unwrap();
    let root = tree.root();

    // Same amount, different address.
    assert!(!verify(
        &root,
        &proof,
        &Entitlement::new("terra1stranger", records[0].amount.clone())
    ));
    // Same address, different amount.
    assert!(!verify(
        &root,
        &proof,
        &Entitlement::new(records[0].address.clone(), "123456789")
    ));
}

#[test]
fn test_flipping_any_proof_byte_fails() {
    let (records, tree) = build(9);
    let root = tree.root();
    let record = &records[4];
    let proof = tree.proof(record).unwrap();
    assert!(verify(&root, &proof, record));

    for element in 0..proof.len() {
        for byte in [0usize, 15, 31] {
            let mut tampered = proof.clone();
            tampered[element][byte] ^= 0x01;
            assert!(
                !verify(&root, &tampered, record),
                "flip at element {} byte {} still verified",
                element,
                byte
            );
        }
    }
}

#[test]
fn test_swapping_proof_elements_fails() {
    // Pair hashing is order-independent, but the proof sequence encodes the
    // path from leaf to root; reordering it must break verification for a
    // proof of length >= 2.
    let (records, tree) = build(8);
    let root = tree.root();
    let record = &records[2];
    let mut proof = tree.proof(record).unwrap();
    assert!(proof.len() >= 2);

    proof.swap(0, 1);
    assert!(!verify(&root, &proof, record));
}

#[test]
fn test_truncated_and_extended_proofs_fail() {
    let (records, tree) = build(8);
    let root = tree.root();
    let record = &records[5];
    let proof = tree.proof(record).unwrap();

    let truncated = &proof[..proof.len() - 1];
    assert!(!verify(&root, truncated, record));

    let mut extended = proof.clone();
    extended.push([0u8; 32]);
    assert!(!verify(&root, &extended, record));
}

#[test]
fn test_wrong_root_fails() {
    let (records, tree) = build(4);
    let proof = tree.proof(&records[0]).unwrap();
    let mut wrong_root = tree.root();
    wrong_root[0] ^= 0xff;
    assert!(!verify(&wrong_root, &proof, &records[0]));
}

#[test]
fn test_verify_hex_never_panics_on_garbage() {
    let record = Entitlement::new("terra1aaa", "100");
    let cases: &[(&str, &[&str])] = &[
        ("", &[]),
        ("0x", &[]),
        ("zz", &["zz"]),
        (
            "0x2fd0f865d297bee66be8abbd549e9f490b25c3455c2f5594c195b1ab92dda9a6",
            &["0xdeadbeef"],
        ),
    ];
    for (root, proof) in cases {
        let proof: Vec<String> = proof.iter().map(|s| s.to_string()).collect();
        assert!(!verify_hex(root, &proof, &record));
    }
}

#[test]
fn test_proof_for_duplicate_records() {
    let records = vec![
        Entitlement::new("terra1aaa", "100"),
        Entitlement::new("terra1aaa", "100"),
        Entitlement::new("terra1bbb", "50"),
    ];
    let tree = MerkleTree::build(&records).unwrap();
    let proof = tree.proof(&records[0]).unwrap();
    assert!(verify(&tree.root(), &proof, &records[0]));
}
