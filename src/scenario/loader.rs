//! Load portfolio holdings from CSV
//!
//! Expected header: `type,name,value,annualGrowthRate,liquidityScore,riskScore,notes`.
//! Blank growth/score/notes cells fall back to the asset-type defaults.

use super::AssetAllocation;
use crate::assumptions::AssetType;
use crate::error::{Result, ScenarioError};
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// Raw CSV row matching the holdings export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    asset_type: String,
    name: String,
    value: f64,
    #[serde(rename = "annualGrowthRate", default)]
    annual_growth_rate: Option<f64>,
    #[serde(rename = "liquidityScore", default)]
    liquidity_score: Option<u8>,
    #[serde(rename = "riskScore", default)]
    risk_score: Option<u8>,
    #[serde(default)]
    notes: Option<String>,
}

impl CsvRow {
    fn into_asset(self, row: usize) -> Result<AssetAllocation> {
        let asset_type: AssetType = self
            .asset_type
            .parse()
            .map_err(|message| ScenarioError::AssetRow { row, message })?;

        Ok(AssetAllocation {
            asset_type,
            name: self.name,
            value: self.value,
            annual_growth_rate: self.annual_growth_rate,
            liquidity_score: self.liquidity_score,
            risk_score: self.risk_score,
            notes: self.notes.filter(|n| !n.is_empty()),
        })
    }
}

/// Load holdings from any reader (e.g., string buffer, uploaded file)
pub fn load_assets_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<AssetAllocation>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut assets = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Row numbers are 1-based and skip the header line
        assets.push(row.into_asset(idx + 1)?);
    }

    log::debug!("Loaded {} holdings from CSV", assets.len());
    Ok(assets)
}

/// Load holdings from a CSV file
pub fn load_assets<P: AsRef<Path>>(path: P) -> Result<Vec<AssetAllocation>> {
    let file = std::fs::File::open(path)?;
    load_assets_from_reader(file)
}
