//! Error types for the claimtree commitment pipeline.

use thiserror::Error;

/// Merkle tree construction and proof lookup errors
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot build a Merkle tree from an empty entitlement set")]
    EmptyInput,

    #[error("no leaf for address {address} with amount {amount}")]
    LeafNotFound { address: String, amount: String },

    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

/// Snapshot aggregation errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid amount {amount:?} for {address}: expected a base-10 unsigned integer")]
    InvalidAmount { address: String, amount: String },

    #[error("aggregate balance overflow for delegator {0}")]
    AmountOverflow(String),

    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI-surface errors aggregating the domain errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("address not present in snapshot: {0}. Run `claimtree show` to inspect the snapshot.")]
    AddressNotInSnapshot(String),

    #[error("proof verification failed for {address}")]
    ProofRejected { address: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
