//! Static projection assumptions: return bands per risk profile and asset-type defaults

mod asset_class;
mod risk_profile;

pub use asset_class::{AssetClassProfile, AssetType};
pub use risk_profile::{ReturnBand, RiskProfile};
