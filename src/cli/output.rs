//! CLI output: error mapping from domain errors to a stable CLI surface.

use crate::error::ApiError;
use owo_colors::OwoColorize;

/// Map domain errors to a string for CLI output.
///
/// A rejected proof is a verdict, not a malfunction, so it gets its own
/// shape; everything else is prefixed uniformly. Keeps route handlers
/// thin; extend with more categories if needed.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::ProofRejected { address } => {
            format!("{} claim rejected for {}", "Proof invalid:".red().bold(), address)
        }
        _ => format!("Error: {}", e),
    }
}
