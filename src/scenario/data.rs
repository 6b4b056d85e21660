//! Scenario data structures matching the front end's JSON shape

use serde::{Deserialize, Serialize};

use crate::assumptions::{AssetType, RiskProfile};

fn default_current_age() -> u32 {
    30
}

/// Goal a scenario is built for; `PortfolioAnalysis` selects the portfolio calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioType {
    Retirement,
    Education,
    Home,
    Wealth,
    Custom,
    PortfolioAnalysis,
}

impl ScenarioType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioType::Retirement => "retirement",
            ScenarioType::Education => "education",
            ScenarioType::Home => "home",
            ScenarioType::Wealth => "wealth",
            ScenarioType::Custom => "custom",
            ScenarioType::PortfolioAnalysis => "portfolio-analysis",
        }
    }
}

/// An investment plan to project, discriminated by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Scenario {
    Retirement(ContributionScenario),
    Education(ContributionScenario),
    Home(ContributionScenario),
    Wealth(ContributionScenario),
    Custom(ContributionScenario),
    PortfolioAnalysis(PortfolioScenario),
}

impl Scenario {
    /// Wrap a contribution plan under the given goal.
    /// `PortfolioAnalysis` is not a contribution goal and falls back to `Custom`.
    pub fn contribution(goal: ScenarioType, plan: ContributionScenario) -> Self {
        match goal {
            ScenarioType::Retirement => Scenario::Retirement(plan),
            ScenarioType::Education => Scenario::Education(plan),
            ScenarioType::Home => Scenario::Home(plan),
            ScenarioType::Wealth => Scenario::Wealth(plan),
            ScenarioType::Custom | ScenarioType::PortfolioAnalysis => Scenario::Custom(plan),
        }
    }

    pub fn scenario_type(&self) -> ScenarioType {
        match self {
            Scenario::Retirement(_) => ScenarioType::Retirement,
            Scenario::Education(_) => ScenarioType::Education,
            Scenario::Home(_) => ScenarioType::Home,
            Scenario::Wealth(_) => ScenarioType::Wealth,
            Scenario::Custom(_) => ScenarioType::Custom,
            Scenario::PortfolioAnalysis(_) => ScenarioType::PortfolioAnalysis,
        }
    }

    /// The contribution plan, for every variant except portfolio analysis
    pub fn as_contribution(&self) -> Option<&ContributionScenario> {
        match self {
            Scenario::Retirement(plan)
            | Scenario::Education(plan)
            | Scenario::Home(plan)
            | Scenario::Wealth(plan)
            | Scenario::Custom(plan) => Some(plan),
            Scenario::PortfolioAnalysis(_) => None,
        }
    }

    pub fn as_portfolio(&self) -> Option<&PortfolioScenario> {
        match self {
            Scenario::PortfolioAnalysis(portfolio) => Some(portfolio),
            _ => None,
        }
    }
}

/// A one-off amount added or withdrawn when the investor reaches `age`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpSum {
    pub age: u32,
    pub amount: f64,
}

/// Recurring-investment plan: initial lump sum plus an inflation-escalated monthly SIP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionScenario {
    pub initial_investment: f64,
    pub monthly_investment: f64,

    /// Projection horizon in years
    pub years: u32,

    /// Age at year 0; lump sums are matched against `current_age + year`
    #[serde(default = "default_current_age")]
    pub current_age: u32,

    #[serde(default)]
    pub risk_profile: RiskProfile,

    /// Manual annual return in percent; 0 derives it from `risk_profile`
    #[serde(default)]
    pub expected_returns: f64,

    /// Annual inflation in percent; also the yearly step-up of the monthly contribution
    #[serde(default)]
    pub inflation_rate: f64,

    /// Carried for display only, never applied while compounding
    #[serde(default)]
    pub tax_rate: f64,

    #[serde(default)]
    pub additional_contributions: Vec<LumpSum>,

    #[serde(default)]
    pub withdrawals: Vec<LumpSum>,
}

impl Default for ContributionScenario {
    fn default() -> Self {
        Self {
            initial_investment: 0.0,
            monthly_investment: 0.0,
            years: 0,
            current_age: default_current_age(),
            risk_profile: RiskProfile::default(),
            expected_returns: 0.0,
            inflation_rate: 0.0,
            tax_rate: 0.0,
            additional_contributions: Vec::new(),
            withdrawals: Vec::new(),
        }
    }
}

impl ContributionScenario {
    pub fn new(initial_investment: f64, monthly_investment: f64, years: u32) -> Self {
        Self {
            initial_investment,
            monthly_investment,
            years,
            ..Default::default()
        }
    }

    /// Effective annual return in percent
    pub fn annual_return(&self) -> f64 {
        self.risk_profile.effective_return(self.expected_returns)
    }

    /// Monthly rate that compounds to the annual return over 12 months
    pub fn monthly_rate(&self) -> f64 {
        (1.0 + self.annual_return() / 100.0).powf(1.0 / 12.0) - 1.0
    }

    /// Net lump-sum flow at `age`: (added to amount and invested, withdrawn from amount)
    pub fn lump_sums_at(&self, age: u32) -> (f64, f64) {
        let added = self
            .additional_contributions
            .iter()
            .filter(|c| c.age == age)
            .map(|c| c.amount)
            .sum();
        let withdrawn = self
            .withdrawals
            .iter()
            .filter(|w| w.age == age)
            .map(|w| w.amount)
            .sum();
        (added, withdrawn)
    }
}

/// A person depending on the portfolio, optionally with an education goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    pub relation: String,
    pub age: u32,

    /// Years from today until education funds are needed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_year: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_cost: Option<f64>,
}

/// One holding in an existing portfolio.
///
/// Growth, liquidity, and risk fall back to the [`AssetType`] defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub name: String,

    /// Today's value
    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_growth_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity_score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AssetAllocation {
    pub fn new(asset_type: AssetType, name: impl Into<String>, value: f64) -> Self {
        Self {
            asset_type,
            name: name.into(),
            value,
            annual_growth_rate: None,
            liquidity_score: None,
            risk_score: None,
            notes: None,
        }
    }

    pub fn with_growth_rate(mut self, annual_growth_rate: f64) -> Self {
        self.annual_growth_rate = Some(annual_growth_rate);
        self
    }

    pub fn with_liquidity_score(mut self, score: u8) -> Self {
        self.liquidity_score = Some(score);
        self
    }

    pub fn with_risk_score(mut self, score: u8) -> Self {
        self.risk_score = Some(score);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Annual growth in percent, configured or defaulted
    pub fn growth_rate(&self) -> f64 {
        self.annual_growth_rate
            .unwrap_or(self.asset_type.profile().annual_growth_rate)
    }

    pub fn liquidity(&self) -> u8 {
        self.liquidity_score
            .unwrap_or(self.asset_type.profile().liquidity_score)
    }

    pub fn risk(&self) -> u8 {
        self.risk_score.unwrap_or(self.asset_type.profile().risk_score)
    }

    /// Value after `years` of compounding at the asset's own growth rate
    pub fn projected_value(&self, years: u32) -> f64 {
        self.value * growth_factor(self.growth_rate(), years)
    }
}

/// `(1 + rate/100)^years`
pub(crate) fn growth_factor(annual_rate_pct: f64, years: u32) -> f64 {
    (1.0 + annual_rate_pct / 100.0).powi(years as i32)
}

/// Existing multi-asset portfolio with household context
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioScenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retirement_age: Option<u32>,

    /// Projection horizon in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,

    #[serde(default)]
    pub monthly_expenses: f64,

    #[serde(default)]
    pub inflation_rate: f64,

    #[serde(default)]
    pub current_assets: Vec<AssetAllocation>,

    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl PortfolioScenario {
    pub fn total_value(&self) -> f64 {
        self.current_assets.iter().map(|a| a.value).sum()
    }

    /// `(current_age, years)` when the portfolio has everything needed to project
    pub fn projection_inputs(&self) -> Option<(u32, u32)> {
        if self.current_assets.is_empty() {
            return None;
        }
        Some((self.current_age?, self.years?))
    }
}
