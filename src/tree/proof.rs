//! Inclusion proof generation and verification

use crate::entitlement::Entitlement;
use crate::error::TreeError;
use crate::tree::builder::MerkleTree;
use crate::tree::hasher;
use crate::types::{parse_digest, Hash};
use tracing::debug;

impl MerkleTree {
    /// Generate the inclusion proof for a record.
    ///
    /// Returns the sibling digests ordered leaf-to-root. A level where the
    /// current node is an odd carry has no sibling and contributes nothing.
    /// Fails with `LeafNotFound` when the record's derived leaf is not
    /// committed by this tree.
    pub fn proof(&self, record: &Entitlement) -> Result<Vec<Hash>, TreeError> {
        let leaf = hasher::leaf_hash(record);
        let mut index =
            self.levels[0]
                .binary_search(&leaf)
                .map_err(|_| TreeError::LeafNotFound {
                    address: record.address.clone(),
                    amount: record.amount.clone(),
                })?;

        let mut proof = Vec::with_capacity(self.depth().saturating_sub(1));
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                proof.push(level[sibling]);
            }
            index /= 2;
        }
        debug!(
            address = %record.address,
            proof_len = proof.len(),
            "Generated inclusion proof"
        );
        Ok(proof)
    }
}

/// Verify an inclusion proof against a root digest.
///
/// Recomputes the leaf for `record` and folds the sorted-pair hash over the
/// proof elements in order, then compares the result to `root`. Malformed,
/// truncated, or reordered proofs simply fail the comparison: this function
/// never errors or panics, so it is safe to call on untrusted input.
pub fn verify(root: &Hash, proof: &[Hash], record: &Entitlement) -> bool {
    let mut current = hasher::leaf_hash(record);
    for sibling in proof {
        current = hasher::pair_hash(&current, sibling);
    }
    current == *root
}

/// Hex-string variant of [`verify`] for claims-file and CLI consumers.
///
/// An undecodable root or proof element is treated as a failed proof, not
/// an error.
pub fn verify_hex(root: &str, proof: &[String], record: &Entitlement) -> bool {
    let root = match parse_digest(root) {
        Ok(digest) => digest,
        Err(_) => return false,
    };
    let mut siblings = Vec::with_capacity(proof.len());
    for element in proof {
        match parse_digest(element) {
            Ok(digest) => siblings.push(digest),
            Err(_) => return false,
        }
    }
    verify(&root, &siblings, record)
}
