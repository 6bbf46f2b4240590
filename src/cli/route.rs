//! CLI route: single route table and run context. Dispatches to the
//! library modules and presentation.

use crate::claims::ClaimsFile;
use crate::cli::parse::Commands;
use crate::cli::presentation;
use crate::config::{ClaimtreeConfig, ConfigLoader};
use crate::entitlement::Entitlement;
use crate::error::ApiError;
use crate::snapshot::{self, Snapshot};
use crate::tree::{self, MerkleTree};
use crate::types::encode_digest;
use std::path::PathBuf;

/// Runtime context for CLI execution, built from the optional config path.
pub struct RunContext {
    #[allow(dead_code)]
    config: ClaimtreeConfig,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self { config })
    }

    /// Execute a parsed command, returning the text printed on stdout.
    ///
    /// A rejected proof surfaces as `ApiError::ProofRejected` so the binary
    /// exits nonzero; the underlying `verify` itself never fails.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Snapshot {
                delegations,
                output,
            } => {
                let rows = snapshot::load_delegations(delegations)?;
                let aggregated = Snapshot::aggregate(&rows)?;
                aggregated.write(output)?;
                Ok(presentation::format_snapshot_summary(&aggregated, output))
            }
            Commands::Root { snapshot, format } => {
                let loaded = Snapshot::load(snapshot)?;
                let merkle_tree = MerkleTree::build(&loaded.entitlements())?;
                match format.as_str() {
                    "json" => Ok(presentation::format_root_json(
                        &merkle_tree.root_hex(),
                        merkle_tree.leaf_count(),
                    )),
                    _ => Ok(presentation::format_root_text(&merkle_tree.root_hex())),
                }
            }
            Commands::Proof {
                snapshot,
                address,
                format,
            } => {
                let loaded = Snapshot::load(snapshot)?;
                let amount = loaded
                    .balance(address)
                    .ok_or_else(|| ApiError::AddressNotInSnapshot(address.clone()))?;
                let record = Entitlement::new(address.clone(), amount.to_string());
                let merkle_tree = MerkleTree::build(&loaded.entitlements())?;
                let proof: Vec<String> = merkle_tree
                    .proof(&record)?
                    .iter()
                    .map(encode_digest)
                    .collect();
                match format.as_str() {
                    "json" => Ok(presentation::format_proof_json(
                        address,
                        &record.amount,
                        &proof,
                    )),
                    _ => Ok(presentation::format_proof_text(
                        address,
                        &record.amount,
                        &proof,
                    )),
                }
            }
            Commands::Claims { snapshot, output } => {
                let loaded = Snapshot::load(snapshot)?;
                let claims = ClaimsFile::generate(&loaded)?;
                claims.write(output)?;
                Ok(presentation::format_claims_summary(&claims, output))
            }
            Commands::Verify {
                root,
                address,
                amount,
                proof,
            } => {
                let record = Entitlement::new(address.clone(), amount.clone());
                if tree::verify_hex(root, proof, &record) {
                    Ok(presentation::format_verify_valid(address, amount))
                } else {
                    Err(ApiError::ProofRejected {
                        address: address.clone(),
                    })
                }
            }
            Commands::Show { snapshot, limit } => {
                let loaded = Snapshot::load(snapshot)?;
                Ok(presentation::format_snapshot_table(&loaded, *limit))
            }
        }
    }
}
