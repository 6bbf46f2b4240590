//! Claims file generation
//!
//! The claims file is the distributable commitment artifact: the Merkle
//! root plus one (amount, proof) entry per delegator, so a claimant can
//! submit a proof without access to the full entitlement list.

use crate::entitlement::Entitlement;
use crate::error::ApiError;
use crate::snapshot::Snapshot;
use crate::tree::{self, MerkleTree};
use crate::types::encode_digest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Claimable allocation plus its inclusion proof, hex-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimEntry {
    pub amount: String,
    pub proof: Vec<String>,
}

/// Distribution artifact for one airdrop round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsFile {
    pub merkle_root: String,
    pub generated_at: DateTime<Utc>,
    pub total_amount: String,
    pub claims: BTreeMap<String, ClaimEntry>,
}

impl ClaimsFile {
    /// Build the commitment tree for a snapshot and emit a proof per
    /// delegator.
    #[instrument(skip(snapshot), fields(delegator_count = snapshot.len()))]
    pub fn generate(snapshot: &Snapshot) -> Result<Self, ApiError> {
        let records = snapshot.entitlements();
        let merkle_tree = MerkleTree::build(&records)?;

        let mut claims = BTreeMap::new();
        for record in &records {
            let proof = merkle_tree.proof(record)?;
            claims.insert(
                record.address.clone(),
                ClaimEntry {
                    amount: record.amount.clone(),
                    proof: proof.iter().map(encode_digest).collect(),
                },
            );
        }

        info!(
            claim_count = claims.len(),
            root = %merkle_tree.root_hex(),
            "Generated claims file"
        );
        Ok(Self {
            merkle_root: merkle_tree.root_hex(),
            generated_at: Utc::now(),
            total_amount: snapshot.total().to_string(),
            claims,
        })
    }

    /// Write the claims file as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<(), ApiError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load a claims file from disk.
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    /// Check one entry of this file against its own root.
    pub fn verify_entry(&self, address: &str) -> bool {
        match self.claims.get(address) {
            Some(entry) => tree::verify_hex(
                &self.merkle_root,
                &entry.proof,
                &Entitlement::new(address, entry.amount.clone()),
            ),
            None => false,
        }
    }
}
