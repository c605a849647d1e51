use std::fs;

use anyhow::{Context, Result, anyhow};

use super::Universe;

pub fn load_universe(data_path: &str) -> Result<Universe> {
    let raw = fs::read_to_string(data_path)
        .with_context(|| format!("failed to read universe data from {data_path}"))?;
    parse_universe(&raw).with_context(|| format!("failed to parse universe data from {data_path}"))
}

fn parse_universe(raw: &str) -> Result<Universe> {
    let universe: Universe = serde_json::from_str(raw).context("invalid universe JSON")?;

    if universe.skills.is_empty() && universe.projects.is_empty() {
        return Err(anyhow!("universe data contains no skills or projects"));
    }

    Ok(universe)
}
