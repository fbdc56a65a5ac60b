use quotesim_core::MarketShareBreakdown;
use serde_json::{json, Value};

use crate::error::CliError;

pub fn run() -> Result<Value, CliError> {
    let breakdown = MarketShareBreakdown::bundled();

    let normalized: Vec<Value> = breakdown
        .normalized()
        .into_iter()
        .map(|(name, percent)| json!({ "name": name, "percent": percent }))
        .collect();

    Ok(json!({
        "slices": serde_json::to_value(breakdown.slices())?,
        "normalized": normalized,
    }))
}
