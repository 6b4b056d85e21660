//! Projection engine for contribution plans and current portfolios

mod state;
mod engine;
mod contribution;
mod portfolio;
mod results;
mod export;

pub use state::ContributionState;
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use contribution::project_contributions;
pub use portfolio::analyze_portfolio;
pub use results::{
    AssetClassShare, AssetProjection, EducationGoalFunding, PortfolioAnalysis, ProjectionResult,
    ProjectionSummary, ProjectionYear, RetirementReadiness,
};
pub use export::write_projection_csv;
