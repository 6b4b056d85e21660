//! Asset-type defaults for growth, liquidity, and risk

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class of a holding in a current portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    Savings,
    MutualFunds,
    /// National Pension System
    Nps,
    /// Public Provident Fund
    Ppf,
    SukanyaSamriddhi,
    Cash,
    Gold,
    RealEstate,
    FixedDeposit,
    Stocks,
    /// Employees' Provident Fund
    Epf,
    Other,
}

/// Default attributes applied to a holding when the caller leaves them blank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetClassProfile {
    /// Annual growth rate in percent
    pub annual_growth_rate: f64,
    /// 1-10, 10 = most liquid
    pub liquidity_score: u8,
    /// 1-10, 10 = highest risk
    pub risk_score: u8,
}

impl AssetType {
    /// Every asset type, in display order
    pub const ALL: [AssetType; 12] = [
        AssetType::Savings,
        AssetType::MutualFunds,
        AssetType::Nps,
        AssetType::Ppf,
        AssetType::SukanyaSamriddhi,
        AssetType::Cash,
        AssetType::Gold,
        AssetType::RealEstate,
        AssetType::FixedDeposit,
        AssetType::Stocks,
        AssetType::Epf,
        AssetType::Other,
    ];

    /// Default growth/liquidity/risk record for this asset type
    pub const fn profile(self) -> AssetClassProfile {
        let (annual_growth_rate, liquidity_score, risk_score) = match self {
            AssetType::Savings => (3.5, 10, 1),
            AssetType::MutualFunds => (12.0, 6, 6),
            AssetType::Nps => (10.0, 2, 5),
            AssetType::Ppf => (7.1, 3, 1),
            AssetType::SukanyaSamriddhi => (8.2, 2, 1),
            AssetType::Cash => (0.0, 10, 1),
            AssetType::Gold => (8.0, 6, 4),
            AssetType::RealEstate => (7.0, 2, 5),
            AssetType::FixedDeposit => (6.5, 5, 2),
            AssetType::Stocks => (14.0, 8, 8),
            AssetType::Epf => (8.25, 2, 1),
            AssetType::Other => (6.0, 5, 5),
        };
        AssetClassProfile {
            annual_growth_rate,
            liquidity_score,
            risk_score,
        }
    }

    /// Kebab-case identifier used in JSON and CSV
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Savings => "savings",
            AssetType::MutualFunds => "mutual-funds",
            AssetType::Nps => "nps",
            AssetType::Ppf => "ppf",
            AssetType::SukanyaSamriddhi => "sukanya-samriddhi",
            AssetType::Cash => "cash",
            AssetType::Gold => "gold",
            AssetType::RealEstate => "real-estate",
            AssetType::FixedDeposit => "fixed-deposit",
            AssetType::Stocks => "stocks",
            AssetType::Epf => "epf",
            AssetType::Other => "other",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AssetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown asset type: {}", needle))
    }
}
