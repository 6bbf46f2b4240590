//! Entitlement Merkle Tree
//!
//! Commits a set of (address, amount) entitlements to a single Keccak-256
//! root and answers inclusion-proof queries against it. Pair hashing is
//! order-independent (sorted-pair rule), so proofs are flat sibling lists
//! with no left/right bookkeeping.

pub mod builder;
pub mod hasher;
pub mod proof;

pub use builder::MerkleTree;
pub use proof::{verify, verify_hex};
