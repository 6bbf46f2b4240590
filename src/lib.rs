//! Claimtree: Merkle Commitments for Token Airdrops
//!
//! Builds a Keccak-256 Merkle commitment over a set of (address, amount)
//! entitlements, produces inclusion proofs for individual claims, and
//! verifies them against the published root.

pub mod claims;
pub mod cli;
pub mod config;
pub mod entitlement;
pub mod error;
pub mod logging;
pub mod snapshot;
pub mod tree;
pub mod types;
