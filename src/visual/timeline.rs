//! Reeksen voor de cognitieve tijdlijngrafiek: zonder en met behandeling.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::{Scenario, TreatmentEffect};

/// Twee uitgelijnde percentagereeksen met gedeelde labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineSeries {
    pub labels: Vec<String>,
    pub baseline: Vec<i64>,
    pub treated: Vec<i64>,
}

impl TimelineSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Baseline,
    Treated,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => f.write_str("baseline"),
            Self::Treated => f.write_str("treated"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("{series} reeks heeft {found} waarden, verwacht {expected}")]
    LengthMismatch {
        series: SeriesKind,
        expected: usize,
        found: usize,
    },
    #[error("geen behandeleffect beschikbaar voor scenario `{0}`")]
    MissingTreatment(String),
}

/// Zet een fractie om naar een afgerond percentage.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Bouwt de grafiekreeksen voor een scenario en het bijbehorende behandeleffect.
pub fn build_series(
    scenario: &Scenario,
    treatment: &TreatmentEffect,
) -> Result<TimelineSeries, SeriesError> {
    let expected = scenario.timepoint_count();
    check_length(SeriesKind::Baseline, expected, scenario.cognitive_function.len())?;
    check_length(SeriesKind::Treated, expected, treatment.cognitive_function.len())?;

    Ok(TimelineSeries {
        labels: scenario.timepoints.clone(),
        baseline: scenario
            .cognitive_function
            .iter()
            .copied()
            .map(to_percent)
            .collect(),
        treated: treatment
            .cognitive_function
            .iter()
            .copied()
            .map(to_percent)
            .collect(),
    })
}

fn check_length(series: SeriesKind, expected: usize, found: usize) -> Result<(), SeriesError> {
    if expected == found {
        Ok(())
    } else {
        Err(SeriesError::LengthMismatch {
            series,
            expected,
            found,
        })
    }
}
