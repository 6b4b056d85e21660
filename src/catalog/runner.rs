//! Comparison runner for projecting many scenarios side by side
//!
//! Each scenario is projected independently, so the batch is evaluated in parallel
//! and collected back in input order.

use rayon::prelude::*;
use serde::Serialize;

use super::{NamedScenario, ScenarioCatalog};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};
use crate::scenario::ScenarioType;

/// Outcome of projecting one named scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub id: String,
    pub name: String,
    pub scenario_type: ScenarioType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ProjectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComparisonEntry {
    pub fn summary(&self) -> Option<&ProjectionSummary> {
        self.result.as_ref().map(|r| &r.summary)
    }
}

/// Results for a batch of scenarios, in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub entries: Vec<ComparisonEntry>,
    /// Entry with the highest final amount
    pub best_index: Option<usize>,
    /// Entry with the highest wealth multiplier
    pub best_multiplier_index: Option<usize>,
}

/// Index of the successful entry maximising `metric`
fn best_by(entries: &[ComparisonEntry], metric: fn(&ProjectionSummary) -> f64) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| entry.summary().map(|s| (idx, metric(s))))
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(idx, _)| idx)
}

impl ComparisonReport {
    fn from_entries(entries: Vec<ComparisonEntry>) -> Self {
        let best_index = best_by(&entries, |s| s.final_amount);
        let best_multiplier_index = best_by(&entries, |s| s.wealth_multiplier);

        Self {
            entries,
            best_index,
            best_multiplier_index,
        }
    }

    pub fn best(&self) -> Option<&ComparisonEntry> {
        self.best_index.and_then(|idx| self.entries.get(idx))
    }

    /// Number of entries that failed validation
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|e| e.error.is_some()).count()
    }
}

/// Runs the engine over batches of scenarios
#[derive(Debug, Clone, Default)]
pub struct ComparisonRunner {
    engine: ProjectionEngine,
}

impl ComparisonRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn with_engine(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Project a single scenario, capturing validation failures in the entry
    pub fn run(&self, named: &NamedScenario) -> ComparisonEntry {
        let (result, error) = match self.engine.project(&named.scenario) {
            Ok(result) => (Some(result), None),
            Err(e) => {
                log::warn!("Scenario '{}' failed validation: {}", named.id, e);
                (None, Some(e.to_string()))
            }
        };

        ComparisonEntry {
            id: named.id.clone(),
            name: named.name.clone(),
            scenario_type: named.scenario.scenario_type(),
            result,
            error,
        }
    }

    /// Project every scenario in parallel
    pub fn compare(&self, scenarios: &[NamedScenario]) -> ComparisonReport {
        log::info!("Comparing {} scenarios", scenarios.len());
        let entries: Vec<ComparisonEntry> = scenarios.par_iter().map(|s| self.run(s)).collect();
        ComparisonReport::from_entries(entries)
    }

    pub fn compare_catalog(&self, catalog: &ScenarioCatalog) -> ComparisonReport {
        self.compare(catalog.scenarios())
    }
}
