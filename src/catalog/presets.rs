//! Built-in scenarios offered before the user builds their own

use super::NamedScenario;
use crate::assumptions::{AssetType, RiskProfile};
use crate::scenario::{
    AssetAllocation, ContributionScenario, Dependent, LumpSum, PortfolioScenario, Scenario,
};

fn named(id: &str, name: &str, description: &str, scenario: Scenario) -> NamedScenario {
    NamedScenario {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        scenario,
    }
}

/// Default preset list, in display order
pub fn default_presets() -> Vec<NamedScenario> {
    vec![
        named(
            "retirement",
            "Retirement Planning",
            "Build a retirement corpus with a step-up SIP over 25 years",
            Scenario::Retirement(ContributionScenario {
                initial_investment: 100_000.0,
                monthly_investment: 10_000.0,
                years: 25,
                current_age: 35,
                risk_profile: RiskProfile::Moderate,
                inflation_rate: 6.0,
                tax_rate: 10.0,
                ..Default::default()
            }),
        ),
        named(
            "education",
            "Child Education",
            "Save for higher education fees due in 15 years",
            Scenario::Education(ContributionScenario {
                initial_investment: 50_000.0,
                monthly_investment: 5_000.0,
                years: 15,
                current_age: 32,
                risk_profile: RiskProfile::Moderate,
                inflation_rate: 8.0,
                tax_rate: 10.0,
                ..Default::default()
            }),
        ),
        named(
            "home",
            "Home Down Payment",
            "Accumulate a down payment over 7 years with a bonus top-up",
            Scenario::Home(ContributionScenario {
                initial_investment: 200_000.0,
                monthly_investment: 25_000.0,
                years: 7,
                current_age: 28,
                risk_profile: RiskProfile::Conservative,
                inflation_rate: 5.0,
                tax_rate: 10.0,
                additional_contributions: vec![LumpSum {
                    age: 31,
                    amount: 300_000.0,
                }],
                ..Default::default()
            }),
        ),
        named(
            "wealth",
            "Wealth Creation",
            "Long-horizon equity-heavy wealth building",
            Scenario::Wealth(ContributionScenario {
                initial_investment: 500_000.0,
                monthly_investment: 20_000.0,
                years: 20,
                current_age: 30,
                risk_profile: RiskProfile::Aggressive,
                inflation_rate: 6.0,
                tax_rate: 10.0,
                withdrawals: vec![LumpSum {
                    age: 40,
                    amount: 1_000_000.0,
                }],
                ..Default::default()
            }),
        ),
        named(
            "portfolio-analysis",
            "Current Portfolio Analysis",
            "Sample household portfolio with a daughter's education goal",
            Scenario::PortfolioAnalysis(sample_household()),
        ),
    ]
}

/// Household portfolio used by the portfolio-analysis preset
pub fn sample_household() -> PortfolioScenario {
    PortfolioScenario {
        current_age: Some(42),
        retirement_age: Some(57),
        years: Some(15),
        monthly_expenses: 120_000.0,
        inflation_rate: 6.0,
        current_assets: vec![
            AssetAllocation::new(AssetType::Savings, "Savings Account", 1_200_000.0)
                .with_growth_rate(3.5),
            AssetAllocation::new(AssetType::MutualFunds, "Equity Mutual Funds", 33_400_000.0)
                .with_growth_rate(12.0)
                .with_risk_score(7),
            AssetAllocation::new(
                AssetType::SukanyaSamriddhi,
                "Sukanya Samriddhi Account",
                1_600_000.0,
            )
            .with_notes("Daughter's account"),
            AssetAllocation::new(AssetType::Cash, "Cash at Home", 1_600_000.0),
            AssetAllocation::new(AssetType::Epf, "EPF", 2_500_000.0),
            AssetAllocation::new(AssetType::Gold, "Gold Jewellery", 800_000.0),
        ],
        dependents: vec![Dependent {
            relation: "daughter".to_string(),
            age: 13,
            education_year: Some(5),
            education_cost: Some(5_000_000.0),
        }],
    }
}
