//! Scenario validation at the engine boundary
//!
//! Rejects values that would otherwise propagate as NaN through the projection
//! (non-finite numbers, negative amounts, scores outside 1-10) and ages that would
//! run past a human lifespan.

use super::data::{AssetAllocation, ContributionScenario, LumpSum, PortfolioScenario, Scenario};
use crate::error::ValidationError;

fn finite(field: impl Into<String>, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite {
            field: field.into(),
            value,
        })
    }
}

fn amount(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    let field = field.into();
    if finite(field.as_str(), value)? < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn score(field: impl Into<String>, value: Option<u8>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !(1..=10).contains(&v) => Err(ValidationError::ScoreOutOfRange {
            field: field.into(),
            value: v,
        }),
        _ => Ok(()),
    }
}

fn horizon(years: u32, max_years: u32) -> Result<(), ValidationError> {
    if years > max_years {
        return Err(ValidationError::HorizonTooLong {
            years,
            max: max_years,
        });
    }
    Ok(())
}

/// Oldest age a projection row may reach
const MAX_AGE: u32 = 150;

fn final_age(current_age: u32, years: u32) -> Result<(), ValidationError> {
    match current_age.checked_add(years) {
        Some(age) if age <= MAX_AGE => Ok(()),
        _ => Err(ValidationError::AgeOutOfRange {
            current_age,
            years,
            max: MAX_AGE,
        }),
    }
}

fn lump_sums(list: &str, entries: &[LumpSum]) -> Result<(), ValidationError> {
    for (i, entry) in entries.iter().enumerate() {
        amount(format!("{list}[{i}].amount"), entry.amount)?;
    }
    Ok(())
}

impl Scenario {
    /// Check every numeric field before projecting.
    ///
    /// Negative inflation and a non-positive manual return are accepted: the first
    /// de-escalates contributions, the second falls back to the risk profile.
    pub fn validate(&self, max_years: u32) -> Result<(), ValidationError> {
        match self {
            Scenario::Retirement(plan)
            | Scenario::Education(plan)
            | Scenario::Home(plan)
            | Scenario::Wealth(plan)
            | Scenario::Custom(plan) => plan.validate(max_years),
            Scenario::PortfolioAnalysis(portfolio) => portfolio.validate(max_years),
        }
    }
}

impl ContributionScenario {
    pub fn validate(&self, max_years: u32) -> Result<(), ValidationError> {
        amount("initialInvestment", self.initial_investment)?;
        amount("monthlyInvestment", self.monthly_investment)?;
        horizon(self.years, max_years)?;
        final_age(self.current_age, self.years)?;
        finite("expectedReturns", self.expected_returns)?;
        finite("inflationRate", self.inflation_rate)?;
        amount("taxRate", self.tax_rate)?;
        lump_sums("additionalContributions", &self.additional_contributions)?;
        lump_sums("withdrawals", &self.withdrawals)
    }
}

impl AssetAllocation {
    fn validate(&self, index: usize) -> Result<(), ValidationError> {
        let prefix = format!("currentAssets[{index}]");
        amount(format!("{prefix}.value"), self.value)?;
        if let Some(rate) = self.annual_growth_rate {
            finite(format!("{prefix}.annualGrowthRate"), rate)?;
        }
        score(format!("{prefix}.liquidityScore"), self.liquidity_score)?;
        score(format!("{prefix}.riskScore"), self.risk_score)
    }
}

impl PortfolioScenario {
    pub fn validate(&self, max_years: u32) -> Result<(), ValidationError> {
        if let Some(years) = self.years {
            horizon(years, max_years)?;
            if let Some(current_age) = self.current_age {
                final_age(current_age, years)?;
            }
        }
        finite("monthlyExpenses", self.monthly_expenses)?;
        finite("inflationRate", self.inflation_rate)?;
        for (i, asset) in self.current_assets.iter().enumerate() {
            asset.validate(i)?;
        }
        for (i, dependent) in self.dependents.iter().enumerate() {
            if let Some(cost) = dependent.education_cost {
                amount(format!("dependents[{i}].educationCost"), cost)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AssetType;
    use crate::scenario::Dependent;

    #[test]
    fn test_valid_contribution_passes() {
        let mut plan = ContributionScenario::new(100_000.0, 10_000.0, 25);
        plan.inflation_rate = -1.5;
        plan.expected_returns = -3.0;
        assert_eq!(plan.validate(100), Ok(()));
    }

    #[test]
    fn test_nan_is_rejected_with_field_name() {
        let plan = ContributionScenario::new(f64::NAN, 10_000.0, 25);
        match plan.validate(100) {
            Err(ValidationError::NotFinite { field, .. }) => assert_eq!(field, "initialInvestment"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_negative_withdrawal_amount_is_rejected() {
        let mut plan = ContributionScenario::new(0.0, 0.0, 5);
        plan.withdrawals = vec![
            LumpSum { age: 31, amount: 10.0 },
            LumpSum { age: 32, amount: -10.0 },
        ];
        assert_eq!(
            plan.validate(100),
            Err(ValidationError::Negative {
                field: "withdrawals[1].amount".into(),
                value: -10.0,
            })
        );
    }

    #[test]
    fn test_horizon_limit() {
        let plan = ContributionScenario::new(0.0, 0.0, 101);
        assert_eq!(
            plan.validate(100),
            Err(ValidationError::HorizonTooLong { years: 101, max: 100 })
        );
    }

    #[test]
    fn test_age_past_maximum_is_rejected() {
        let mut plan = ContributionScenario::new(0.0, 0.0, 2);
        plan.current_age = u32::MAX;
        assert_eq!(
            plan.validate(100),
            Err(ValidationError::AgeOutOfRange {
                current_age: u32::MAX,
                years: 2,
                max: MAX_AGE,
            })
        );

        plan.current_age = 140;
        plan.years = 10;
        assert_eq!(plan.validate(100), Ok(()));
        plan.years = 11;
        assert!(matches!(plan.validate(100), Err(ValidationError::AgeOutOfRange { .. })));

        let portfolio = PortfolioScenario {
            current_age: Some(u32::MAX),
            years: Some(3),
            current_assets: vec![AssetAllocation::new(AssetType::Cash, "Cash", 10.0)],
            ..Default::default()
        };
        assert!(matches!(
            portfolio.validate(100),
            Err(ValidationError::AgeOutOfRange { years: 3, .. })
        ));
    }

    #[test]
    fn test_asset_checks() {
        let mut portfolio = PortfolioScenario {
            current_age: Some(40),
            years: Some(10),
            current_assets: vec![
                AssetAllocation::new(AssetType::Cash, "Cash", 10.0),
                AssetAllocation::new(AssetType::Gold, "Gold", -1.0),
            ],
            ..Default::default()
        };
        assert!(matches!(
            portfolio.validate(100),
            Err(ValidationError::Negative { ref field, .. }) if field == "currentAssets[1].value"
        ));

        portfolio.current_assets[1] =
            AssetAllocation::new(AssetType::Gold, "Gold", 1.0).with_risk_score(11);
        assert!(matches!(
            portfolio.validate(100),
            Err(ValidationError::ScoreOutOfRange { value: 11, .. })
        ));

        portfolio.current_assets[1] = AssetAllocation::new(AssetType::Gold, "Gold", 1.0);
        portfolio.dependents.push(Dependent {
            relation: "son".into(),
            age: 4,
            education_year: Some(14),
            education_cost: Some(f64::INFINITY),
        });
        assert!(matches!(
            portfolio.validate(100),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_scenario_dispatches_to_variant() {
        let scenario = Scenario::Home(ContributionScenario::new(-5.0, 0.0, 3));
        assert!(scenario.validate(100).is_err());
        let portfolio = Scenario::PortfolioAnalysis(PortfolioScenario::default());
        assert_eq!(portfolio.validate(100), Ok(()));
    }
}
