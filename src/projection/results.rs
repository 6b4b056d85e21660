//! Output structures shared by both calculators

use serde::{Deserialize, Serialize};

use crate::assumptions::AssetType;

/// Projected value of one holding in a given year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProjection {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub value: f64,
}

/// A single row of projection output for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYear {
    /// Years from today (0 = today)
    pub year: u32,
    pub age: u32,

    /// Nominal value at the start of this year
    pub total_amount: f64,
    /// Cumulative principal put in (portfolio mode: today's portfolio value)
    pub total_invested: f64,
    /// Contributions scheduled over the coming year
    pub yearly_investment: f64,
    pub yearly_return: f64,
    /// `total_amount` deflated to today's money
    pub inflation_adjusted_value: f64,

    /// Per-holding values, portfolio mode only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_values: Vec<AssetProjection>,
}

/// Headline metrics derived from the final row
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub final_amount: f64,
    pub total_investment_amount: f64,
    pub total_returns: f64,
    pub wealth_multiplier: f64,
    /// Compound annual growth rate as a fraction (0.11 = 11%)
    pub cagr: f64,
    pub years: u32,
}

impl ProjectionSummary {
    pub fn from_totals(final_amount: f64, total_investment_amount: f64, years: u32) -> Self {
        let wealth_multiplier = if total_investment_amount > 0.0 {
            final_amount / total_investment_amount
        } else {
            0.0
        };
        let cagr = if years > 0 && wealth_multiplier > 0.0 {
            wealth_multiplier.powf(1.0 / years as f64) - 1.0
        } else {
            0.0
        };

        Self {
            final_amount,
            total_investment_amount,
            total_returns: final_amount - total_investment_amount,
            wealth_multiplier,
            cagr,
            years,
        }
    }

    /// Returns after tax at `tax_rate` percent; losses are not taxed
    pub fn post_tax_returns(&self, tax_rate: f64) -> f64 {
        if self.total_returns <= 0.0 {
            return self.total_returns;
        }
        self.total_returns * (1.0 - tax_rate / 100.0)
    }

    pub fn post_tax_final_amount(&self, tax_rate: f64) -> f64 {
        self.total_investment_amount + self.post_tax_returns(tax_rate)
    }
}

/// Share of today's portfolio held in one asset type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassShare {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationGoalFunding {
    /// Relation of the dependent the goal belongs to
    pub relation: String,
    pub education_year: u32,
    pub education_cost: f64,
    pub projected_value: f64,
    pub funding_percentage: f64,
    pub funded: bool,
    pub shortfall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementReadiness {
    pub retirement_year: u32,
    pub corpus: f64,
    pub ideal_corpus: f64,
    pub funding_percentage: f64,
    pub shortfall: f64,
    pub years_of_expenses_covered: f64,
}

/// Diagnostics computed for portfolio-analysis scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    pub current_value: f64,
    pub asset_class_distribution: Vec<AssetClassShare>,
    /// Value-weighted risk score (1-10)
    pub risk_score: f64,
    /// Value-weighted liquidity score (1-10)
    pub liquidity_score: f64,
    pub liquid_assets: f64,
    pub emergency_fund_months: f64,
    pub education_goal_funding: Option<EducationGoalFunding>,
    pub retirement_readiness: Option<RetirementReadiness>,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Yearly rows, `years + 1` of them
    pub data: Vec<ProjectionYear>,
    pub summary: ProjectionSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_analysis: Option<PortfolioAnalysis>,
}

impl ProjectionResult {
    /// Build a result whose summary is derived from the last row
    pub fn from_rows(data: Vec<ProjectionYear>) -> Self {
        let summary = data
            .last()
            .map(|last| {
                ProjectionSummary::from_totals(last.total_amount, last.total_invested, last.year)
            })
            .unwrap_or_default();

        Self {
            data,
            summary,
            portfolio_analysis: None,
        }
    }

    /// All-zero result returned when a scenario lacks the inputs to project
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            summary: ProjectionSummary::default(),
            portfolio_analysis: None,
        }
    }

    pub fn with_portfolio_analysis(mut self, analysis: PortfolioAnalysis) -> Self {
        self.portfolio_analysis = Some(analysis);
        self
    }

    /// Row for a given year, if projected that far
    pub fn year(&self, year: u32) -> Option<&ProjectionYear> {
        self.data.get(year as usize)
    }
}
