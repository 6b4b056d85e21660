//! Wealth Projection - deterministic financial scenario projection engine
//!
//! This library provides:
//! - Contribution plan projections (initial lump sum + inflation-escalated monthly SIP)
//! - Current-portfolio projections with per-asset compounding
//! - Portfolio diagnostics (allocation, risk, liquidity, emergency fund, education
//!   funding, retirement readiness)
//! - A scenario catalog and a parallel comparison runner

pub mod error;
pub mod assumptions;
pub mod scenario;
pub mod projection;
pub mod catalog;

// Re-export commonly used types
pub use error::{Result, ScenarioError, ValidationError};
pub use assumptions::{AssetType, RiskProfile};
pub use scenario::{
    AssetAllocation, ContributionScenario, PortfolioScenario, Scenario, ScenarioType,
};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionYear};
pub use catalog::{ComparisonReport, ComparisonRunner, NamedScenario, ScenarioCatalog};
