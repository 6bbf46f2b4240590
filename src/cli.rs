//! CLI domain: parse, route, output, and presentation only.
//! No domain logic; a single route table dispatches to the library modules.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_claims_summary, format_proof_json, format_proof_text, format_root_json,
    format_root_text, format_snapshot_summary, format_snapshot_table, format_verify_valid,
};
pub use route::RunContext;
