//! Entitlement records: the (address, amount) pairs the tree commits to.

use serde::{Deserialize, Serialize};

/// One claimable airdrop allocation.
///
/// `amount` stays a string end-to-end: the leaf digest is computed over the
/// exact bytes the record carries, so re-formatting the number would change
/// the commitment. Address uniqueness is not enforced here; duplicate
/// records produce duplicate leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub address: String,
    pub amount: String,
}

impl Entitlement {
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }
}

/// Whether `amount` is a well-formed non-negative base-10 integer string.
///
/// Leading zeros are allowed; signs, exponents, and separators are not.
pub fn is_valid_amount(amount: &str) -> bool {
    !amount.is_empty() && amount.bytes().all(|b| b.is_ascii_digit())
}
