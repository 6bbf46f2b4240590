//! Merkle tree construction over entitlement records

use crate::entitlement::Entitlement;
use crate::error::TreeError;
use crate::tree::hasher;
use crate::types::{encode_digest, Hash};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Balanced binary Keccak-256 commitment tree with sorted-pair hashing.
///
/// Levels are stored as an array-backed arena indexed by (level, position):
/// `levels[0]` holds the canonically sorted leaf digests, each higher level
/// halves the count (rounding up), and the last level is the single root.
/// The tree never mutates after construction, so concurrent proof queries
/// need no synchronization.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    pub(crate) levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build a tree from entitlement records.
    ///
    /// Leaves are sorted ascending by digest bytes before pairing, so the
    /// root is independent of the caller's record order. Pairing walks each
    /// level left-to-right; a level with an odd node count carries its last
    /// digest up to the next level unchanged.
    #[instrument(skip(records), fields(record_count = records.len()))]
    pub fn build(records: &[Entitlement]) -> Result<Self, TreeError> {
        if records.is_empty() {
            return Err(TreeError::EmptyInput);
        }
        let start = Instant::now();

        let mut level: Vec<Hash> = records.iter().map(hasher::leaf_hash).collect();
        level.sort_unstable();
        debug!(leaf_count = level.len(), "Sorted leaf level");

        let mut levels = Vec::new();
        while level.len() > 1 {
            let mut next = Vec::with_capacity((level.len() + 1) / 2);
            let mut pairs = level.chunks_exact(2);
            for pair in &mut pairs {
                next.push(hasher::pair_hash(&pair[0], &pair[1]));
            }
            if let [carry] = pairs.remainder() {
                next.push(*carry);
            }
            levels.push(level);
            level = next;
        }
        levels.push(level);

        let tree = Self { levels };
        info!(
            leaf_count = tree.leaf_count(),
            depth = tree.depth(),
            root = %tree.root_hex(),
            duration_ms = start.elapsed().as_millis(),
            "Merkle tree built"
        );
        Ok(tree)
    }

    /// Root digest committing the entire entitlement set.
    pub fn root(&self) -> Hash {
        self.levels[self.levels.len() - 1][0]
    }

    /// Root digest as a `0x`-prefixed lowercase hex string.
    pub fn root_hex(&self) -> String {
        encode_digest(&self.root())
    }

    /// Number of leaves, counting duplicates.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels from leaves to root inclusive.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Whether the record's derived leaf is committed by this tree.
    pub fn contains(&self, record: &Entitlement) -> bool {
        self.levels[0].binary_search(&hasher::leaf_hash(record)).is_ok()
    }
}
