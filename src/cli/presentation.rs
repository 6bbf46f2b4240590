//! CLI presentation: result formatters for the command surface.

use crate::claims::ClaimsFile;
use crate::snapshot::Snapshot;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Text mode prints the bare digest so the output stays pipeable.
pub fn format_root_text(root_hex: &str) -> String {
    root_hex.to_string()
}

pub fn format_root_json(root_hex: &str, leaf_count: usize) -> String {
    serde_json::json!({
        "merkle_root": root_hex,
        "leaf_count": leaf_count,
    })
    .to_string()
}

pub fn format_proof_text(address: &str, amount: &str, proof: &[String]) -> String {
    let mut lines = vec![format!("Proof for {} (amount {}):", address, amount)];
    if proof.is_empty() {
        lines.push("  (empty proof: single-leaf tree)".to_string());
    } else {
        for element in proof {
            lines.push(format!("  {}", element));
        }
    }
    lines.join("\n")
}

pub fn format_proof_json(address: &str, amount: &str, proof: &[String]) -> String {
    serde_json::json!({
        "address": address,
        "amount": amount,
        "proof": proof,
    })
    .to_string()
}

pub fn format_verify_valid(address: &str, amount: &str) -> String {
    format!(
        "{} claim for {} (amount {})",
        "Proof valid:".green().bold(),
        address,
        amount
    )
}

pub fn format_snapshot_summary(snapshot: &Snapshot, output: &std::path::Path) -> String {
    format!(
        "Snapshot written to {}\n  Delegators: {}\n  Total: {}",
        output.display(),
        snapshot.len(),
        snapshot.total()
    )
}

pub fn format_claims_summary(claims: &ClaimsFile, output: &std::path::Path) -> String {
    format!(
        "Claims file written to {}\n  Root: {}\n  Claims: {}\n  Total: {}",
        output.display(),
        claims.merkle_root,
        claims.claims.len(),
        claims.total_amount
    )
}

pub fn format_snapshot_table(snapshot: &Snapshot, limit: usize) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Address", "Amount"]);

    let mut shown = 0usize;
    for (address, balance) in snapshot.iter() {
        if limit > 0 && shown >= limit {
            break;
        }
        table.add_row(vec![address.clone(), balance.to_string()]);
        shown += 1;
    }

    let mut out = table.to_string();
    let remaining = snapshot.len().saturating_sub(shown);
    if remaining > 0 {
        out.push_str(&format!("\n... and {} more", remaining));
    }
    out.push_str(&format!(
        "\nDelegators: {}  Total: {}",
        snapshot.len(),
        snapshot.total()
    ));
    out
}
