//! End-to-end pipeline tests: delegation export -> snapshot -> claims file.

use claimtree::claims::ClaimsFile;
use claimtree::entitlement::Entitlement;
use claimtree::snapshot::{load_delegations, Snapshot};
use claimtree::tree::{verify_hex, MerkleTree};
use tempfile::TempDir;

const DELEGATIONS_JSON: &str = r#"[
    {"delegator_address": "terra1aaa", "validator_address": "terravaloper1xxx", "amount": "1000"},
    {"delegator_address": "terra1aaa", "validator_address": "terravaloper1yyy", "amount": "500"},
    {"delegator_address": "terra1bbb", "validator_address": "terravaloper1xxx", "amount": "250"},
    {"delegator_address": "terra1ccc", "validator_address": "terravaloper1zzz", "amount": "0"}
]"#;

#[test]
fn test_full_pipeline_produces_verifiable_claims() {
    let dir = TempDir::new().unwrap();
    let delegations_path = dir.path().join("delegations.json");
    let snapshot_path = dir.path().join("snapshot.json");
    let claims_path = dir.path().join("claims.json");
    std::fs::write(&delegations_path, DELEGATIONS_JSON).unwrap();

    // Aggregate and persist the snapshot.
    let rows = load_delegations(&delegations_path).unwrap();
    let snapshot = Snapshot::aggregate(&rows).unwrap();
    assert_eq!(snapshot.balance("terra1aaa"), Some(1500));
    assert_eq!(snapshot.balance("terra1ccc"), Some(0));
    snapshot.write(&snapshot_path).unwrap();

    // Reload and generate the claims file.
    let reloaded = Snapshot::load(&snapshot_path).unwrap();
    assert_eq!(reloaded, snapshot);
    let claims = ClaimsFile::generate(&reloaded).unwrap();
    claims.write(&claims_path).unwrap();

    // Every persisted claim verifies against the persisted root.
    let published = ClaimsFile::load(&claims_path).unwrap();
    assert_eq!(published.claims.len(), 3);
    for (address, entry) in &published.claims {
        let record = Entitlement::new(address.clone(), entry.amount.clone());
        assert!(
            verify_hex(&published.merkle_root, &entry.proof, &record),
            "claim for {} failed verification",
            address
        );
    }
}

#[test]
fn test_claims_root_matches_direct_tree_root() {
    let rows = load_delegations_from_str();
    let snapshot = Snapshot::aggregate(&rows).unwrap();
    let claims = ClaimsFile::generate(&snapshot).unwrap();

    let tree = MerkleTree::build(&snapshot.entitlements()).unwrap();
    assert_eq!(claims.merkle_root, tree.root_hex());
}

#[test]
fn test_cross_claim_proofs_do_not_transfer() {
    // A proof issued for one delegator must not validate another
    // delegator's claim.
    let rows = load_delegations_from_str();
    let snapshot = Snapshot::aggregate(&rows).unwrap();
    let claims = ClaimsFile::generate(&snapshot).unwrap();

    let aaa = &claims.claims["terra1aaa"];
    let bbb = &claims.claims["terra1bbb"];
    let forged = Entitlement::new("terra1bbb", bbb.amount.clone());
    assert!(!verify_hex(&claims.merkle_root, &aaa.proof, &forged));
}

fn load_delegations_from_str() -> Vec<claimtree::snapshot::Delegation> {
    serde_json::from_str(DELEGATIONS_JSON).unwrap()
}
