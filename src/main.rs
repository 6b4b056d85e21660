//! Wealth Projection CLI
//!
//! Command-line interface for projecting and comparing saved scenarios

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use wealth_projection::{
    catalog::{ComparisonRunner, NamedScenario, ScenarioCatalog},
    projection::{write_projection_csv, ProjectionConfig, ProjectionEngine, ProjectionResult},
};

#[derive(Parser)]
#[command(
    name = "wealth_projection",
    version,
    about = "Project contribution plans and portfolios year by year"
)]
struct Cli {
    /// JSON file overriding engine settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project one scenario (or every scenario) from a catalog file
    Project {
        /// JSON array of named scenarios
        catalog: PathBuf,
        /// Only project this scenario id
        #[arg(long)]
        id: Option<String>,
        /// Write the yearly rows of the selected scenario to this CSV file
        #[arg(long, requires = "id")]
        csv: Option<PathBuf>,
    },
    /// Compare every scenario in a catalog file side by side
    Compare {
        catalog: PathBuf,
        /// Print the full comparison report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the built-in preset scenarios
    Presets {
        /// Print the presets as a catalog JSON file
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<ProjectionConfig> {
    match path {
        Some(path) => ProjectionConfig::from_json_path(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ProjectionConfig::default()),
    }
}

fn load_catalog(path: &Path) -> Result<ScenarioCatalog> {
    ScenarioCatalog::from_json_path(path)
        .with_context(|| format!("failed to load scenarios from {}", path.display()))
}

fn print_result(named: &NamedScenario, result: &ProjectionResult) {
    let s = &result.summary;
    println!("{} [{}] - {}", named.name, named.id, named.scenario.scenario_type().as_str());
    println!("  Final Amount:      {:>16.2}", s.final_amount);
    println!("  Total Invested:    {:>16.2}", s.total_investment_amount);
    println!("  Total Returns:     {:>16.2}", s.total_returns);
    println!("  Wealth Multiplier: {:>16.2}x", s.wealth_multiplier);
    println!("  CAGR:              {:>16.2}%", s.cagr * 100.0);
    if let Some(plan) = named.scenario.as_contribution() {
        println!("  Post-tax Amount:   {:>16.2}", s.post_tax_final_amount(plan.tax_rate));
    }

    if let Some(analysis) = &result.portfolio_analysis {
        println!("  Risk Score:        {:>16.1}", analysis.risk_score);
        println!("  Liquidity Score:   {:>16.1}", analysis.liquidity_score);
        println!("  Emergency Fund:    {:>13.1} mo", analysis.emergency_fund_months);
        for share in &analysis.asset_class_distribution {
            println!("    {:<20} {:>6.2}%", share.asset_type.as_str(), share.percentage);
        }
        if let Some(edu) = &analysis.education_goal_funding {
            println!(
                "  Education ({}, year {}): {:.1}% funded, shortfall {:.2}",
                edu.relation, edu.education_year, edu.funding_percentage, edu.shortfall
            );
        }
        if let Some(ret) = &analysis.retirement_readiness {
            println!(
                "  Retirement (year {}): {:.1}% of ideal corpus, {:.1} years of expenses",
                ret.retirement_year, ret.funding_percentage, ret.years_of_expenses_covered
            );
        }
    }
    println!();
}

fn run_project(
    engine: &ProjectionEngine,
    catalog: &ScenarioCatalog,
    id: Option<&str>,
    csv: Option<&Path>,
) -> Result<()> {
    let selected: Vec<&NamedScenario> = match id {
        Some(id) => match catalog.get(id) {
            Some(named) => vec![named],
            None => bail!("scenario '{}' not found", id),
        },
        None => catalog.iter().collect(),
    };

    for named in selected {
        let result = engine
            .project(&named.scenario)
            .with_context(|| format!("scenario '{}' is invalid", named.id))?;
        print_result(named, &result);

        if let Some(path) = csv {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_projection_csv(BufWriter::new(file), &result.data)?;
            println!("Yearly rows written to: {}", path.display());
        }
    }
    Ok(())
}

fn run_compare(runner: &ComparisonRunner, catalog: &ScenarioCatalog, json: bool) -> Result<()> {
    let report = runner.compare_catalog(catalog);
    if json {
        serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
        println!();
        return Ok(());
    }

    println!(
        "{:<24} {:<20} {:>16} {:>16} {:>8} {:>8}",
        "Scenario", "Type", "Final Amount", "Invested", "Multi", "CAGR%"
    );
    println!("{}", "-".repeat(97));
    for (idx, entry) in report.entries.iter().enumerate() {
        let marker = if report.best_index == Some(idx) { "*" } else { " " };
        match entry.summary() {
            Some(s) => println!(
                "{}{:<23} {:<20} {:>16.2} {:>16.2} {:>8.2} {:>8.2}",
                marker,
                entry.name,
                entry.scenario_type.as_str(),
                s.final_amount,
                s.total_investment_amount,
                s.wealth_multiplier,
                s.cagr * 100.0
            ),
            None => println!(
                " {:<23} {:<20} error: {}",
                entry.name,
                entry.scenario_type.as_str(),
                entry.error.as_deref().unwrap_or("unknown")
            ),
        }
    }
    if report.error_count() > 0 {
        println!("\n{} scenario(s) failed validation", report.error_count());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Project { catalog, id, csv } => {
            let catalog = load_catalog(&catalog)?;
            run_project(&ProjectionEngine::new(config), &catalog, id.as_deref(), csv.as_deref())
        }
        Command::Compare { catalog, json } => {
            let catalog = load_catalog(&catalog)?;
            run_compare(&ComparisonRunner::new(config), &catalog, json)
        }
        Command::Presets { json } => {
            let catalog = ScenarioCatalog::with_presets();
            if json {
                catalog.to_json_writer(io::stdout().lock())?;
                println!();
            } else {
                for named in catalog.iter() {
                    println!(
                        "{:<20} {:<20} {}",
                        named.id,
                        named.scenario.scenario_type().as_str(),
                        named.description.as_deref().unwrap_or(&named.name)
                    );
                }
            }
            Ok(())
        }
    }
}
