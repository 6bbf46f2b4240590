//! Keccak-256 hashing rules for leaves and interior nodes

use crate::entitlement::Entitlement;
use crate::types::Hash;
use sha3::{Digest, Keccak256};

/// Compute the leaf digest for an entitlement record.
///
/// Leaf = Keccak256(address || amount) over the raw UTF-8 bytes of both
/// strings, concatenated with no delimiter.
pub fn leaf_hash(record: &Entitlement) -> Hash {
    Keccak256::new()
        .chain_update(record.address.as_bytes())
        .chain_update(record.amount.as_bytes())
        .finalize()
        .into()
}

/// Hash two child digests with the sorted-pair rule.
///
/// The smaller digest (raw byte order) is always hashed first, so the
/// result does not depend on tree position. Construction and verification
/// must both go through this function; any asymmetry between the two would
/// make valid proofs fail.
pub fn pair_hash(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    Keccak256::new()
        .chain_update(lo)
        .chain_update(hi)
        .finalize()
        .into()
}
