//! Onveranderlijke weergavetoestand en de projecties die daarvan afhangen.

use crate::model::{AnalysisResult, ScenarioId};

use super::projector::{ProjectionError, ProjectionMap, project};
use super::timeline::{SeriesError, TimelineSeries, build_series};

/// Selectie van scenario, tijdpunt en behandeltoggle.
///
/// Wordt in zijn geheel vervangen bij iedere wijziging, zodat een projectie
/// altijd een consistente combinatie ziet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub scenario: ScenarioId,
    pub time_index: usize,
    pub show_treatment: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scenario: ScenarioId::A,
            time_index: 0,
            show_treatment: true,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn with_scenario(self, scenario: ScenarioId) -> Self {
        Self { scenario, ..self }
    }

    #[must_use]
    pub fn with_time_index(self, time_index: usize) -> Self {
        Self { time_index, ..self }
    }

    #[must_use]
    pub fn with_treatment(self, show_treatment: bool) -> Self {
        Self {
            show_treatment,
            ..self
        }
    }
}

/// Projecteert alle regio's voor de gegeven weergavetoestand.
pub fn project_view(
    analysis: &AnalysisResult,
    view: ViewState,
) -> Result<ProjectionMap, ProjectionError> {
    project(
        analysis.region_index(),
        analysis.scenario(view.scenario),
        analysis.treatment_effect(view.scenario),
        view.time_index,
        view.show_treatment,
    )
}

/// Tijdlijnreeksen voor een scenario uit het analyse-resultaat.
pub fn timeline_for(
    analysis: &AnalysisResult,
    scenario: ScenarioId,
) -> Result<TimelineSeries, SeriesError> {
    let treatment = analysis
        .treatment_effect(scenario)
        .ok_or_else(|| SeriesError::MissingTreatment(scenario.to_string()))?;
    build_series(analysis.scenario(scenario), treatment)
}
