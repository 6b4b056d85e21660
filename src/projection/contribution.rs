//! Contribution plan projection: initial lump sum plus escalating monthly SIP

use super::results::{ProjectionResult, ProjectionYear};
use super::state::ContributionState;
use crate::scenario::ContributionScenario;

/// Project a recurring-investment plan year by year.
///
/// Row `year` is a snapshot taken before that year's contributions and growth, so
/// row 0 is the initial state and the last row is the value after `years` years.
/// Lump sums for age `current_age + year` land after that year's growth and show
/// up from the following row onward.
pub fn project_contributions(plan: &ContributionScenario) -> ProjectionResult {
    let annual_return = plan.annual_return();
    let monthly_rate = plan.monthly_rate();
    let inflation = 1.0 + plan.inflation_rate / 100.0;

    log::debug!(
        "Projecting contribution plan: {} years at {:.2}% ({:.6} monthly)",
        plan.years,
        annual_return,
        monthly_rate
    );

    let mut state = ContributionState::from_scenario(plan);
    let mut data = Vec::with_capacity(plan.years as usize + 1);

    for year in 0..=plan.years {
        data.push(ProjectionYear {
            year,
            age: plan.current_age.saturating_add(year),
            total_amount: state.amount,
            total_invested: state.invested,
            yearly_investment: state.monthly_contribution * 12.0,
            yearly_return: state.amount * annual_return / 100.0,
            inflation_adjusted_value: state.amount / inflation.powi(year as i32),
            asset_values: Vec::new(),
        });

        if year < plan.years {
            state.accumulate_year(monthly_rate);
            state.escalate(plan.inflation_rate);
        }

        let (added, withdrawn) = plan.lump_sums_at(plan.current_age.saturating_add(year));
        if added != 0.0 || withdrawn != 0.0 {
            state.apply_lump_sums(added, withdrawn);
        }
    }

    ProjectionResult::from_rows(data)
}
