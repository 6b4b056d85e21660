//! Running accumulators for a contribution-plan projection

use crate::scenario::ContributionScenario;

/// State of a contribution plan at the start of a projection year
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionState {
    /// Current nominal portfolio value
    pub amount: f64,

    /// Cumulative principal contributed (initial + monthly + lump-sum additions)
    pub invested: f64,

    /// Monthly contribution for the coming year
    pub monthly_contribution: f64,
}

impl ContributionState {
    /// Initialize state from a plan at year 0
    pub fn from_scenario(plan: &ContributionScenario) -> Self {
        Self {
            amount: plan.initial_investment,
            invested: plan.initial_investment,
            monthly_contribution: plan.monthly_investment,
        }
    }

    /// Twelve months of contribute-then-grow at the effective monthly rate
    pub fn accumulate_year(&mut self, monthly_rate: f64) {
        for _month in 0..12 {
            self.amount += self.monthly_contribution;
            self.amount *= 1.0 + monthly_rate;
            self.invested += self.monthly_contribution;
        }
    }

    /// Step the monthly contribution up with inflation for the next year
    pub fn escalate(&mut self, inflation_rate: f64) {
        self.monthly_contribution *= 1.0 + inflation_rate / 100.0;
    }

    /// Withdrawals reduce the amount only; principal already invested stays counted
    pub fn apply_lump_sums(&mut self, added: f64, withdrawn: f64) {
        self.amount += added - withdrawn;
        self.invested += added;
    }
}
