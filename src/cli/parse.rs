//! CLI parse: clap types for claimtree. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Claimtree CLI - Merkle commitments for token airdrop claims
#[derive(Parser)]
#[command(name = "claimtree")]
#[command(about = "Merkle commitment tooling for token airdrop claims")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a delegation export into a per-delegator snapshot
    Snapshot {
        /// Delegation export file (JSON array of delegation rows)
        #[arg(long)]
        delegations: PathBuf,
        /// Output path for the snapshot map
        #[arg(long)]
        output: PathBuf,
    },
    /// Print the Merkle root committing a snapshot
    Root {
        /// Snapshot file (JSON map of address to amount)
        #[arg(long)]
        snapshot: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the inclusion proof for one delegator
    Proof {
        /// Snapshot file (JSON map of address to amount)
        #[arg(long)]
        snapshot: PathBuf,
        /// Delegator address to prove
        #[arg(long)]
        address: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Generate the distributable claims file (root + proof per address)
    Claims {
        /// Snapshot file (JSON map of address to amount)
        #[arg(long)]
        snapshot: PathBuf,
        /// Output path for the claims file
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify a claim proof against a published root
    Verify {
        /// Root digest (0x-prefixed hex)
        #[arg(long)]
        root: String,
        /// Claimed address
        #[arg(long)]
        address: String,
        /// Claimed amount (base-10 integer string)
        #[arg(long)]
        amount: String,
        /// Proof digests, leaf to root (repeat the flag per element)
        #[arg(long = "proof")]
        proof: Vec<String>,
    },
    /// Show the entitlements in a snapshot
    Show {
        /// Snapshot file (JSON map of address to amount)
        #[arg(long)]
        snapshot: PathBuf,
        /// Maximum number of rows to print (0 = all)
        #[arg(long, default_value = "0")]
        limit: usize,
    },
}
