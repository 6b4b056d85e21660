//! Projection engine: validates a scenario and dispatches to the matching calculator

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::contribution::project_contributions;
use super::portfolio::analyze_portfolio;
use super::results::ProjectionResult;
use crate::error::{Result, ValidationError};
use crate::scenario::{ContributionScenario, PortfolioScenario, Scenario};

/// Engine tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionConfig {
    /// Holdings at or above this liquidity score count toward the emergency fund
    pub liquid_threshold: u8,

    /// Fixed annual rate (percent) applied to the Sukanya Samriddhi holding for
    /// education funding
    pub education_growth_rate: f64,

    /// Ideal retirement corpus as a multiple of annual expenses
    pub ideal_corpus_multiple: f64,

    /// Longest horizon accepted by validation, in years
    pub max_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            liquid_threshold: 7,
            education_growth_rate: 7.6,
            ideal_corpus_multiple: 25.0,
            max_years: 100,
        }
    }
}

impl ProjectionConfig {
    /// Load overrides from a JSON file; absent keys keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(config)
    }
}

/// Main projection engine
///
/// Stateless apart from its configuration; every call recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Validate and project any scenario
    pub fn project(
        &self,
        scenario: &Scenario,
    ) -> std::result::Result<ProjectionResult, ValidationError> {
        scenario.validate(self.config.max_years)?;
        log::debug!("Projecting {} scenario", scenario.scenario_type().as_str());
        Ok(self.project_unchecked(scenario))
    }

    /// Project without validating; non-finite inputs propagate as NaN
    pub fn project_unchecked(&self, scenario: &Scenario) -> ProjectionResult {
        match scenario {
            Scenario::Retirement(plan)
            | Scenario::Education(plan)
            | Scenario::Home(plan)
            | Scenario::Wealth(plan)
            | Scenario::Custom(plan) => self.project_contributions(plan),
            Scenario::PortfolioAnalysis(portfolio) => self.analyze_portfolio(portfolio),
        }
    }

    /// Run the contribution calculator directly
    pub fn project_contributions(&self, plan: &ContributionScenario) -> ProjectionResult {
        project_contributions(plan)
    }

    /// Run the portfolio calculator directly
    pub fn analyze_portfolio(&self, portfolio: &PortfolioScenario) -> ProjectionResult {
        analyze_portfolio(portfolio, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AssetType;
    use crate::scenario::AssetAllocation;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use proptest::test_runner::TestCaseError;

    fn portfolio() -> PortfolioScenario {
        PortfolioScenario {
            current_age: Some(35),
            years: Some(10),
            monthly_expenses: 50_000.0,
            current_assets: vec![AssetAllocation::new(AssetType::Stocks, "Index", 1_000_000.0)],
            ..Default::default()
        }
    }

    #[test]
    fn test_dispatch_by_scenario_type() {
        let engine = ProjectionEngine::default();

        let contribution = Scenario::Wealth(ContributionScenario::new(10_000.0, 1_000.0, 5));
        let result = engine.project(&contribution).unwrap();
        assert_eq!(result.data.len(), 6);
        assert!(result.portfolio_analysis.is_none());

        let result = engine.project(&Scenario::PortfolioAnalysis(portfolio())).unwrap();
        assert_eq!(result.data.len(), 11);
        assert!(result.portfolio_analysis.is_some());
    }

    #[test]
    fn test_invalid_scenario_is_rejected_before_projection() {
        let engine = ProjectionEngine::default();
        let scenario = Scenario::Retirement(ContributionScenario::new(f64::NAN, 0.0, 10));
        assert!(matches!(engine.project(&scenario), Err(ValidationError::NotFinite { .. })));
    }

    #[test]
    fn test_age_overflow_is_rejected_for_both_calculators() {
        let engine = ProjectionEngine::default();

        let mut plan = ContributionScenario::new(1_000.0, 100.0, 2);
        plan.current_age = u32::MAX;
        assert!(matches!(
            engine.project(&Scenario::Wealth(plan)),
            Err(ValidationError::AgeOutOfRange { .. })
        ));

        let mut household = portfolio();
        household.current_age = Some(u32::MAX);
        household.years = Some(3);
        assert!(matches!(
            engine.project(&Scenario::PortfolioAnalysis(household)),
            Err(ValidationError::AgeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_config_changes_liquid_threshold() {
        let strict = ProjectionEngine::new(ProjectionConfig {
            liquid_threshold: 9,
            ..Default::default()
        });
        let analysis = strict.analyze_portfolio(&portfolio()).portfolio_analysis.unwrap();
        assert_eq!(analysis.liquid_assets, 0.0);

        let analysis = ProjectionEngine::default()
            .analyze_portfolio(&portfolio())
            .portfolio_analysis
            .unwrap();
        assert_eq!(analysis.liquid_assets, 1_000_000.0);
        assert_eq!(analysis.emergency_fund_months, 20.0);
    }

    #[test]
    fn test_config_json_partial_override() {
        let config: ProjectionConfig =
            serde_json::from_str(r#"{"idealCorpusMultiple": 30}"#).unwrap();
        assert_eq!(config.ideal_corpus_multiple, 30.0);
        assert_eq!(config.liquid_threshold, 7);
        assert_eq!(config.education_growth_rate, 7.6);
    }

    #[test]
    fn test_determinism() {
        let engine = ProjectionEngine::default();
        let scenario = Scenario::PortfolioAnalysis(portfolio());
        assert_eq!(engine.project(&scenario).unwrap(), engine.project(&scenario).unwrap());
    }

    const ASSET_TYPES: [AssetType; 6] = [
        AssetType::Savings,
        AssetType::MutualFunds,
        AssetType::Gold,
        AssetType::Cash,
        AssetType::Stocks,
        AssetType::RealEstate,
    ];

    fn holdings(values: &[u32]) -> Vec<AssetAllocation> {
        values
            .iter()
            .enumerate()
            .map(|(idx, &value)| {
                let asset_type = ASSET_TYPES[idx % ASSET_TYPES.len()];
                AssetAllocation::new(asset_type, format!("holding {idx}"), value as f64)
            })
            .collect()
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
    }

    fn check_summary_identities(
        result: &ProjectionResult,
    ) -> std::result::Result<(), TestCaseError> {
        let s = result.summary;
        let last = &result.data[result.data.len() - 1];
        prop_assert_eq!(s.final_amount, last.total_amount);
        prop_assert_eq!(s.total_investment_amount, last.total_invested);
        prop_assert!(close(s.total_returns, s.final_amount - s.total_investment_amount));

        if s.total_investment_amount > 0.0 {
            prop_assert!(close(s.wealth_multiplier, s.final_amount / s.total_investment_amount));
        } else {
            prop_assert_eq!(s.wealth_multiplier, 0.0);
        }
        if s.years > 0 && s.wealth_multiplier > 0.0 {
            let expected = s.wealth_multiplier.powf(1.0 / s.years as f64) - 1.0;
            prop_assert!(close(s.cagr, expected));
        } else {
            prop_assert_eq!(s.cagr, 0.0);
        }
        Ok(())
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_contribution_rows_track_principal(
            initial in 0u32..2_000_000,
            monthly in 0u32..200_000,
            years in 0u32..41,
            age in 18u32..70,
            return_bp in 0u32..2000,
            inflation_bp in -300i32..1200
        ) {
            let plan = ContributionScenario {
                initial_investment: initial as f64,
                monthly_investment: monthly as f64,
                years,
                current_age: age,
                expected_returns: return_bp as f64 / 100.0,
                inflation_rate: inflation_bp as f64 / 100.0,
                ..Default::default()
            };
            let result = ProjectionEngine::default().project(&Scenario::Custom(plan)).unwrap();

            prop_assert_eq!(result.data.len(), years as usize + 1);
            prop_assert_eq!(result.data[0].total_amount, initial as f64);
            prop_assert_eq!(result.data[0].total_invested, initial as f64);
            for (idx, row) in result.data.iter().enumerate() {
                prop_assert_eq!(row.year, idx as u32);
                prop_assert_eq!(row.age, age + idx as u32);
                let slack = 1e-6 * row.total_invested.max(1.0);
                prop_assert!(row.total_amount + slack >= row.total_invested);
            }
            for pair in result.data.windows(2) {
                prop_assert!(pair[1].total_invested >= pair[0].total_invested);
            }
            prop_assert_eq!(result.summary.years, years);
            check_summary_identities(&result)?;
        }

        #[test]
        fn prop_projection_is_deterministic(
            initial in 0u32..1_000_000,
            monthly in 0u32..50_000,
            years in 0u32..30
        ) {
            let plan = ContributionScenario::new(initial as f64, monthly as f64, years);
            let scenario = Scenario::Home(plan);
            let engine = ProjectionEngine::default();
            let first = engine.project(&scenario).unwrap();
            prop_assert_eq!(first, engine.project(&scenario).unwrap());
        }

        #[test]
        fn prop_portfolio_diagnostics_stay_in_bounds(
            values in proptest::collection::vec(1u32..5_000_000, 1..8),
            years in 0u32..30,
            expenses in 1u32..500_000
        ) {
            let portfolio = PortfolioScenario {
                current_age: Some(40),
                years: Some(years),
                monthly_expenses: expenses as f64,
                current_assets: holdings(&values),
                ..Default::default()
            };
            let result = ProjectionEngine::default().analyze_portfolio(&portfolio);
            let analysis = result.portfolio_analysis.as_ref().unwrap();

            let total: f64 = analysis.asset_class_distribution.iter().map(|s| s.percentage).sum();
            prop_assert!((total - 100.0).abs() < 1e-6);
            for score in [analysis.risk_score, analysis.liquidity_score] {
                prop_assert!((1.0 - 1e-9..=10.0 + 1e-9).contains(&score));
            }
            prop_assert!(analysis.liquid_assets <= analysis.current_value);
            prop_assert_eq!(result.data.len(), years as usize + 1);
            for row in &result.data {
                prop_assert_eq!(row.total_invested, analysis.current_value);
                prop_assert_eq!(row.yearly_investment, 0.0);
            }
            check_summary_identities(&result)?;
        }

        #[test]
        fn prop_extra_cash_never_shrinks_emergency_fund(
            values in proptest::collection::vec(1u32..5_000_000, 1..6),
            extra in 1u32..1_000_000,
            expenses in 1u32..200_000
        ) {
            let mut portfolio = PortfolioScenario {
                current_age: Some(30),
                years: Some(5),
                monthly_expenses: expenses as f64,
                current_assets: holdings(&values),
                ..Default::default()
            };
            let engine = ProjectionEngine::default();
            let before = engine.analyze_portfolio(&portfolio).portfolio_analysis.unwrap();
            portfolio
                .current_assets
                .push(AssetAllocation::new(AssetType::Cash, "Top-up", extra as f64));
            let after = engine.analyze_portfolio(&portfolio).portfolio_analysis.unwrap();

            prop_assert!(after.emergency_fund_months > before.emergency_fund_months);
            prop_assert_eq!(after.liquid_assets, before.liquid_assets + extra as f64);
        }

        #[test]
        fn prop_higher_expenses_shrink_emergency_fund(
            values in proptest::collection::vec(1u32..5_000_000, 1..6),
            expenses in 1u32..200_000,
            raise in 1u32..200_000,
            non_positive in -100_000i32..=0
        ) {
            let mut portfolio = PortfolioScenario {
                current_age: Some(30),
                years: Some(5),
                monthly_expenses: expenses as f64,
                current_assets: holdings(&values),
                ..Default::default()
            };
            let engine = ProjectionEngine::default();
            let before = engine.analyze_portfolio(&portfolio).portfolio_analysis.unwrap();
            // the first holding is always savings, so there is something liquid
            prop_assert!(before.liquid_assets > 0.0);

            portfolio.monthly_expenses += raise as f64;
            let after = engine.analyze_portfolio(&portfolio).portfolio_analysis.unwrap();
            prop_assert_eq!(after.liquid_assets, before.liquid_assets);
            prop_assert!(after.emergency_fund_months < before.emergency_fund_months);

            portfolio.monthly_expenses = non_positive as f64;
            let none = engine.analyze_portfolio(&portfolio).portfolio_analysis.unwrap();
            prop_assert_eq!(none.emergency_fund_months, 0.0);
        }
    }
}
