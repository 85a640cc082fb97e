//! Dumps the Energy API's OpenAPI document.
//!
//! Usage: `openapi [OUTPUT]`. Writes `energy-api.openapi.json` in the current
//! directory when no output path is given.

use energy_api::router::write_openapi;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "energy-api.openapi.json";

fn main() -> anyhow::Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    write_openapi(&output)?;
    println!("Wrote OpenAPI document to {}", output.display());
    Ok(())
}
