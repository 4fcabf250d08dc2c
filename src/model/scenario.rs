//! Scenario's: benoemde ziekteverlopen met tijdreeksen per regio.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identificeert een van de twee gelijktijdig geladen scenario's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ScenarioId {
    /// Typisch verloop (`scenario_a`).
    #[default]
    A,
    /// Versneld verloop (`scenario_b`).
    B,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 2] = [ScenarioId::A, ScenarioId::B];

    /// Korte sleutel zoals de UI die gebruikt (`a` / `b`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }

    /// Veldnaam in het analyse-payload.
    #[must_use]
    pub fn payload_key(self) -> &'static str {
        match self {
            Self::A => "scenario_a",
            Self::B => "scenario_b",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("onbekend scenario `{0}`")]
pub struct UnknownScenarioError(pub String);

impl FromStr for ScenarioId {
    type Err = UnknownScenarioError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "a" | "scenario_a" => Ok(Self::A),
            "b" | "scenario_b" => Ok(Self::B),
            _ => Err(UnknownScenarioError(input.to_owned())),
        }
    }
}

/// Gezondheidsreeksen per regio-basisnaam.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionDataset {
    series: BTreeMap<String, Vec<f64>>,
}

impl RegionDataset {
    /// Voegt een reeks toe; een bestaande reeks met dezelfde naam wordt vervangen.
    pub fn insert(&mut self, base_name: impl Into<String>, values: Vec<f64>) {
        self.series.insert(base_name.into(), values);
    }

    #[must_use]
    pub fn series(&self, base_name: &str) -> Option<&[f64]> {
        self.series.get(base_name).map(Vec::as_slice)
    }
}

impl FromIterator<(String, Vec<f64>)> for RegionDataset {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}

/// Een benoemd ziekteverloop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub timepoints: Vec<String>,
    pub regions: RegionDataset,
    pub cognitive_function: Vec<f64>,
}

impl Scenario {
    #[must_use]
    pub fn timepoint_count(&self) -> usize {
        self.timepoints.len()
    }

    #[must_use]
    pub fn timepoint_label(&self, time_index: usize) -> Option<&str> {
        self.timepoints.get(time_index).map(String::as_str)
    }

    #[must_use]
    pub fn region_series(&self, base_name: &str) -> Option<&[f64]> {
        self.regions.series(base_name)
    }

    #[must_use]
    pub fn cognitive_at(&self, time_index: usize) -> Option<f64> {
        self.cognitive_function.get(time_index).copied()
    }
}
