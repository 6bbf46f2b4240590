//! Delegation snapshot aggregation
//!
//! Reduces a staking delegation export to one aggregate balance per
//! delegator. The export is a JSON array of delegation rows produced by an
//! external fetcher at a fixed block height; this module performs no
//! network I/O.

use crate::entitlement::{is_valid_amount, Entitlement};
use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// One staking delegation row from the export file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delegation {
    pub delegator_address: String,
    pub validator_address: String,
    /// Staked balance in the base denomination, base-10 integer string.
    pub amount: String,
}

/// Aggregate balance per delegator.
///
/// Backed by a `BTreeMap` so iteration order (and therefore every derived
/// artifact) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    balances: BTreeMap<String, u128>,
}

impl Snapshot {
    /// Sum delegated balances per delegator across all validators.
    ///
    /// Every row is counted; eligibility filtering, if any, happens
    /// upstream of the export file.
    #[instrument(skip(delegations), fields(delegation_count = delegations.len()))]
    pub fn aggregate(delegations: &[Delegation]) -> Result<Self, SnapshotError> {
        let mut balances: BTreeMap<String, u128> = BTreeMap::new();
        for delegation in delegations {
            let amount = parse_amount(&delegation.delegator_address, &delegation.amount)?;
            let balance = balances
                .entry(delegation.delegator_address.clone())
                .or_insert(0);
            *balance = balance.checked_add(amount).ok_or_else(|| {
                SnapshotError::AmountOverflow(delegation.delegator_address.clone())
            })?;
        }
        info!(delegator_count = balances.len(), "Aggregated delegation snapshot");
        Ok(Self { balances })
    }

    /// Load a snapshot from a JSON file mapping address to amount string.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path)?;
        let map: BTreeMap<String, String> = serde_json::from_str(&raw)?;
        let mut balances = BTreeMap::new();
        for (address, amount) in map {
            let value = parse_amount(&address, &amount)?;
            balances.insert(address, value);
        }
        Ok(Self { balances })
    }

    /// Write the snapshot as a pretty-printed JSON map.
    pub fn write(&self, path: &Path) -> Result<(), SnapshotError> {
        let map: BTreeMap<&String, String> = self
            .balances
            .iter()
            .map(|(address, balance)| (address, balance.to_string()))
            .collect();
        fs::write(path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }

    /// Entitlement records in address order, ready for tree construction.
    pub fn entitlements(&self) -> Vec<Entitlement> {
        self.balances
            .iter()
            .map(|(address, balance)| Entitlement::new(address.clone(), balance.to_string()))
            .collect()
    }

    /// Aggregate balance for a single delegator.
    pub fn balance(&self, address: &str) -> Option<u128> {
        self.balances.get(address).copied()
    }

    /// Sum of all balances.
    pub fn total(&self) -> u128 {
        self.balances
            .values()
            .fold(0u128, |acc, balance| acc.saturating_add(*balance))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Iterate (address, balance) pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u128)> {
        self.balances.iter()
    }
}

/// Load the delegation export rows from a JSON file.
pub fn load_delegations(path: &Path) -> Result<Vec<Delegation>, SnapshotError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn parse_amount(address: &str, amount: &str) -> Result<u128, SnapshotError> {
    if !is_valid_amount(amount) {
        return Err(SnapshotError::InvalidAmount {
            address: address.to_string(),
            amount: amount.to_string(),
        });
    }
    // Digits already validated, so the only remaining failure is overflow.
    amount
        .parse::<u128>()
        .map_err(|_| SnapshotError::AmountOverflow(address.to_string()))
}
