//! Sweep a contribution plan across a range of annual returns and write the
//! headline metrics for each rate to CSV

use anyhow::{ensure, Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

use wealth_projection::{ContributionScenario, ProjectionEngine, Scenario, ValidationError};

#[derive(Parser)]
#[command(name = "return_sweep", about = "Final corpus across a range of annual returns")]
struct Args {
    #[arg(long, default_value_t = 100_000.0)]
    initial: f64,
    #[arg(long, default_value_t = 10_000.0)]
    monthly: f64,
    #[arg(long, default_value_t = 20)]
    years: u32,
    #[arg(long, default_value_t = 30)]
    age: u32,
    /// Annual step-up of the monthly contribution, percent
    #[arg(long, default_value_t = 6.0)]
    inflation: f64,
    /// Lowest annual return, percent
    #[arg(long, default_value_t = 4.0)]
    min_return: f64,
    /// Highest annual return, percent
    #[arg(long, default_value_t = 16.0)]
    max_return: f64,
    #[arg(long, default_value_t = 0.5)]
    step: f64,
    #[arg(short, long, default_value = "return_sweep.csv")]
    output: PathBuf,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SweepRow {
    annual_return: f64,
    final_amount: f64,
    total_invested: f64,
    total_returns: f64,
    wealth_multiplier: f64,
    cagr: f64,
    inflation_adjusted_value: f64,
}

/// Finest step accepted, in percentage points
const MIN_STEP: f64 = 0.01;
const MAX_RATES: usize = 10_000;

/// Annual returns from `min` to `max` inclusive, `step` apart
fn return_grid(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    ensure!(step >= MIN_STEP, "step must be at least {}", MIN_STEP);
    ensure!(max >= min, "max-return must not be below min-return");

    let steps = ((max - min) / step).round();
    ensure!(
        steps.is_finite() && steps < MAX_RATES as f64,
        "sweep would need more than {} return rates",
        MAX_RATES
    );
    Ok((0..=steps as usize).map(|i| min + i as f64 * step).collect())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rates = return_grid(args.min_return, args.max_return, args.step)?;
    log::info!("Sweeping {} return rates over {} years", rates.len(), args.years);

    let engine = ProjectionEngine::default();
    let rows: Vec<SweepRow> = rates
        .par_iter()
        .map(|&rate| {
            let scenario = Scenario::Custom(ContributionScenario {
                initial_investment: args.initial,
                monthly_investment: args.monthly,
                years: args.years,
                current_age: args.age,
                expected_returns: rate,
                inflation_rate: args.inflation,
                ..Default::default()
            });
            engine.project(&scenario).map(|result| {
                let s = result.summary;
                SweepRow {
                    annual_return: rate,
                    final_amount: s.final_amount,
                    total_invested: s.total_investment_amount,
                    total_returns: s.total_returns,
                    wealth_multiplier: s.wealth_multiplier,
                    cagr: s.cagr,
                    inflation_adjusted_value: result
                        .data
                        .last()
                        .map_or(0.0, |row| row.inflation_adjusted_value),
                }
            })
        })
        .collect::<std::result::Result<Vec<_>, ValidationError>>()
        .context("invalid sweep inputs")?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Written {} return rates to {}", rows.len(), args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_is_inclusive() {
        let rates = return_grid(4.0, 16.0, 0.5).unwrap();
        assert_eq!(rates.len(), 25);
        assert_eq!(rates[0], 4.0);
        assert_relative_eq!(rates[24], 16.0);
    }

    #[test]
    fn test_tiny_or_invalid_step_is_rejected() {
        assert!(return_grid(4.0, 16.0, 1e-12).is_err());
        assert!(return_grid(4.0, 16.0, 0.0).is_err());
        assert!(return_grid(4.0, 16.0, f64::NAN).is_err());
        assert!(return_grid(16.0, 4.0, 0.5).is_err());
    }

    #[test]
    fn test_grid_size_is_capped() {
        assert!(return_grid(0.0, 1_000.0, 0.01).is_err());
        assert!(return_grid(0.0, f64::INFINITY, 1.0).is_err());
        assert_eq!(return_grid(0.0, 99.99, 0.01).unwrap().len(), MAX_RATES);
    }
}
