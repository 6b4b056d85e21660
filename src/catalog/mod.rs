//! Scenario catalog and side-by-side comparison
//!
//! The catalog is an ordered list of named scenarios. It owns no projection state:
//! every projection goes through a [`ProjectionEngine`] and is recomputed on demand.

mod presets;
mod runner;

pub use presets::{default_presets, sample_household};
pub use runner::{ComparisonEntry, ComparisonReport, ComparisonRunner};

use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Result, ScenarioError};
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::scenario::Scenario;

/// A scenario with a stable id and display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub scenario: Scenario,
}

/// Ordered collection of named scenarios with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioCatalog {
    scenarios: Vec<NamedScenario>,
}

impl ScenarioCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the built-in scenarios
    pub fn with_presets() -> Self {
        Self {
            scenarios: default_presets(),
        }
    }

    /// Build from a list, rejecting duplicate ids
    pub fn from_scenarios(scenarios: Vec<NamedScenario>) -> Result<Self> {
        let mut catalog = Self::new();
        for scenario in scenarios {
            catalog.add(scenario)?;
        }
        Ok(catalog)
    }

    /// Load a JSON array of named scenarios
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let scenarios: Vec<NamedScenario> = serde_json::from_reader(reader)?;
        log::debug!("Loaded {} scenarios from JSON", scenarios.len());
        Self::from_scenarios(scenarios)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Write the catalog as a pretty-printed JSON array
    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.scenarios)?;
        Ok(())
    }

    pub fn add(&mut self, scenario: NamedScenario) -> Result<()> {
        if self.get(&scenario.id).is_some() {
            return Err(ScenarioError::DuplicateId(scenario.id));
        }
        self.scenarios.push(scenario);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&NamedScenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedScenario> {
        self.scenarios.iter()
    }

    pub fn scenarios(&self) -> &[NamedScenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Validate and project the scenario with the given id
    pub fn project(&self, engine: &ProjectionEngine, id: &str) -> Result<ProjectionResult> {
        let named = self
            .get(id)
            .ok_or_else(|| ScenarioError::NotFound(id.to_string()))?;
        Ok(engine.project(&named.scenario)?)
    }
}
