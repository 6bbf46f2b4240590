//! Core types shared across the commitment pipeline.

use crate::error::TreeError;

/// 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// Length of a `0x`-prefixed lowercase hex digest string.
pub const DIGEST_HEX_LEN: usize = 66;

/// Encode a digest as a `0x`-prefixed lowercase hex string.
pub fn encode_digest(digest: &Hash) -> String {
    format!("0x{}", hex::encode(digest))
}

/// Parse a hex digest string, with or without the `0x` prefix.
pub fn parse_digest(input: &str) -> Result<Hash, TreeError> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    let mut digest: Hash = [0u8; 32];
    hex::decode_to_slice(stripped, &mut digest)
        .map_err(|e| TreeError::InvalidDigest(format!("{}: {}", input, e)))?;
    Ok(digest)
}
