//! Current-portfolio projection and household diagnostics

use super::engine::ProjectionConfig;
use super::results::{
    AssetClassShare, AssetProjection, EducationGoalFunding, PortfolioAnalysis, ProjectionResult,
    ProjectionYear, RetirementReadiness,
};
use crate::assumptions::AssetType;
use crate::scenario::{growth_factor, AssetAllocation, PortfolioScenario};

/// Project each holding independently and derive allocation, risk, liquidity,
/// emergency-fund, education, and retirement diagnostics.
///
/// Returns [`ProjectionResult::empty`] when there are no holdings or the current
/// age or horizon is missing.
pub fn analyze_portfolio(
    portfolio: &PortfolioScenario,
    config: &ProjectionConfig,
) -> ProjectionResult {
    let Some((current_age, years)) = portfolio.projection_inputs() else {
        log::warn!("Portfolio scenario lacks holdings, age, or horizon; returning empty result");
        return ProjectionResult::empty();
    };

    let assets = &portfolio.current_assets;
    let total_value = portfolio.total_value();
    let inflation = 1.0 + portfolio.inflation_rate / 100.0;

    log::debug!(
        "Analyzing portfolio: {} holdings worth {:.2} over {} years",
        assets.len(),
        total_value,
        years
    );

    let mut data = Vec::with_capacity(years as usize + 1);
    for year in 0..=years {
        let asset_values: Vec<AssetProjection> = assets
            .iter()
            .map(|asset| AssetProjection {
                name: asset.name.clone(),
                asset_type: asset.asset_type,
                value: asset.projected_value(year),
            })
            .collect();
        let total_amount: f64 = asset_values.iter().map(|a| a.value).sum();
        let yearly_return: f64 = assets
            .iter()
            .map(|asset| asset.value * (growth_factor(asset.growth_rate(), year) - 1.0))
            .sum();

        data.push(ProjectionYear {
            year,
            age: current_age.saturating_add(year),
            total_amount,
            total_invested: total_value,
            yearly_investment: 0.0,
            yearly_return,
            inflation_adjusted_value: total_amount / inflation.powi(year as i32),
            asset_values,
        });
    }

    let liquid = liquid_assets(assets, config.liquid_threshold);
    let analysis = PortfolioAnalysis {
        current_value: total_value,
        asset_class_distribution: asset_class_distribution(assets, total_value),
        risk_score: weighted_score(assets, total_value, AssetAllocation::risk),
        liquidity_score: weighted_score(assets, total_value, AssetAllocation::liquidity),
        liquid_assets: liquid,
        emergency_fund_months: emergency_fund_months(liquid, portfolio.monthly_expenses),
        education_goal_funding: education_goal_funding(portfolio, years, config),
        retirement_readiness: retirement_readiness(portfolio, current_age, &data, config),
    };

    ProjectionResult::from_rows(data).with_portfolio_analysis(analysis)
}

/// Value share per asset type, in order of first appearance. Every share is 0% when
/// the holdings are all worth zero.
fn asset_class_distribution(assets: &[AssetAllocation], total_value: f64) -> Vec<AssetClassShare> {
    let mut shares: Vec<AssetClassShare> = Vec::new();
    for asset in assets {
        match shares.iter_mut().find(|s| s.asset_type == asset.asset_type) {
            Some(share) => share.value += asset.value,
            None => shares.push(AssetClassShare {
                asset_type: asset.asset_type,
                value: asset.value,
                percentage: 0.0,
            }),
        }
    }
    for share in &mut shares {
        share.percentage = if total_value > 0.0 {
            share.value / total_value * 100.0
        } else {
            0.0
        };
    }
    shares
}

fn weighted_score(
    assets: &[AssetAllocation],
    total_value: f64,
    score: fn(&AssetAllocation) -> u8,
) -> f64 {
    if total_value <= 0.0 {
        return 0.0;
    }
    assets
        .iter()
        .map(|asset| score(asset) as f64 * (asset.value / total_value))
        .sum()
}

fn liquid_assets(assets: &[AssetAllocation], threshold: u8) -> f64 {
    assets
        .iter()
        .filter(|asset| asset.liquidity() >= threshold)
        .map(|asset| asset.value)
        .sum()
}

fn emergency_fund_months(liquid_assets: f64, monthly_expenses: f64) -> f64 {
    if monthly_expenses <= 0.0 {
        return 0.0;
    }
    liquid_assets / monthly_expenses
}

/// Education funding for the first dependent with an education year.
///
/// Only the Sukanya Samriddhi holding counts, grown at the scheme's fixed rate rather
/// than the holding's configured growth and independent of the yearly projection.
fn education_goal_funding(
    portfolio: &PortfolioScenario,
    years: u32,
    config: &ProjectionConfig,
) -> Option<EducationGoalFunding> {
    let dependent = portfolio.dependents.iter().find(|d| d.education_year.is_some())?;
    let education_year = dependent.education_year?;
    if education_year > years {
        return None;
    }
    let education_cost = dependent.education_cost?;

    let sukanya_value = portfolio
        .current_assets
        .iter()
        .find(|a| a.asset_type == AssetType::SukanyaSamriddhi)
        .map(|a| a.value)
        .unwrap_or(0.0);
    let projected_value =
        sukanya_value * growth_factor(config.education_growth_rate, education_year);

    let funding_percentage = funding_percentage(projected_value, education_cost);
    Some(EducationGoalFunding {
        relation: dependent.relation.clone(),
        education_year,
        education_cost,
        projected_value,
        funding_percentage,
        funded: funding_percentage >= 100.0,
        shortfall: (education_cost - projected_value).max(0.0),
    })
}

fn retirement_readiness(
    portfolio: &PortfolioScenario,
    current_age: u32,
    data: &[ProjectionYear],
    config: &ProjectionConfig,
) -> Option<RetirementReadiness> {
    let retirement_age = portfolio.retirement_age?;
    let retirement_year = retirement_age.checked_sub(current_age)?;
    let corpus = data.get(retirement_year as usize)?.total_amount;

    let annual_expenses = portfolio.monthly_expenses * 12.0;
    let ideal_corpus = annual_expenses * config.ideal_corpus_multiple;

    Some(RetirementReadiness {
        retirement_year,
        corpus,
        ideal_corpus,
        funding_percentage: funding_percentage(corpus, ideal_corpus),
        shortfall: (ideal_corpus - corpus).max(0.0),
        years_of_expenses_covered: if annual_expenses > 0.0 {
            corpus / annual_expenses
        } else {
            0.0
        },
    })
}

/// Capped at 100; a zero target counts as fully funded
fn funding_percentage(available: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 100.0;
    }
    (available / target * 100.0).min(100.0)
}
