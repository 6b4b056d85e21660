//! Scenario data structures, validation, and holdings loading

mod data;
mod validate;
pub mod loader;

pub use data::{
    AssetAllocation, ContributionScenario, Dependent, LumpSum, PortfolioScenario, Scenario,
    ScenarioType,
};
pub(crate) use data::growth_factor;
pub use loader::{load_assets, load_assets_from_reader};
