#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod model;
pub mod parse;
pub mod sample;
pub mod visual;

use std::fmt;

use model::{AnalysisResult, ScenarioId, UnknownScenarioError};
use parse::ParseError;
use serde::Serialize;
use thiserror::Error;
use visual::{
    ProjectionError, RegionPlacement, SeriesError, TimelineSeries, TreatmentPlanSummary,
    ViewState, placements, project_view, timeline_for,
};
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Fouten van de engine-facade.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("er is geen analyse geladen")]
    NotLoaded,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    UnknownScenario(#[from] UnknownScenarioError),
    /// Een weergavewijziging zou een ongeldige tijdindex opleveren.
    #[error("tijdindex {index} valt buiten scenario `{scenario}` ({len} tijdpunten)")]
    TimeIndexOutOfRange {
        scenario: ScenarioId,
        index: usize,
        len: usize,
    },
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Render-toestand van één regio zoals de scène-adapter die verwerkt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStateExport {
    pub id: String,
    pub health: f64,
    pub scale: f64,
    /// CSS-kleur, bijvoorbeeld `hsl(210, 80%, 55%)`.
    pub color: String,
    pub rgb: [f64; 3],
}

/// Public entry point for consumers.
#[wasm_bindgen]
pub struct Engine {
    initialized: bool,
    analysis: Option<AnalysisResult>,
    view: ViewState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            initialized: true,
            analysis: None,
            view: ViewState::default(),
        }
    }

    /// Geeft terug of de engine de minimale initialisatie heeft doorlopen.
    #[wasm_bindgen]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Laad een analyse-payload (JSON) en zet de weergave terug naar het begin.
    #[wasm_bindgen]
    pub fn load_analysis(&mut self, json: &str) -> Result<(), JsValue> {
        self.load_analysis_str(json).map_err(to_js_error)
    }

    /// Laad de meegeleverde gesimuleerde analyse, bedoeld voor ontwikkeling.
    #[wasm_bindgen]
    pub fn load_simulated(&mut self) -> Result<(), JsValue> {
        let analysis = sample::simulated_analysis().map_err(to_js_error)?;
        self.load_analysis_result(analysis);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_scenario(&mut self, scenario: &str) -> Result<(), JsValue> {
        let scenario = scenario.parse::<ScenarioId>().map_err(to_js_error)?;
        self.apply_view(self.view.with_scenario(scenario))
            .map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn set_time_index(&mut self, time_index: usize) -> Result<(), JsValue> {
        self.apply_view(self.view.with_time_index(time_index))
            .map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn set_treatment_effect(&mut self, show_effect: bool) {
        self.view = self.view.with_treatment(show_effect);
    }

    /// Wijzig scenario, tijdpunt en toggle in één stap.
    #[wasm_bindgen]
    pub fn set_view(
        &mut self,
        scenario: &str,
        time_index: usize,
        show_treatment: bool,
    ) -> Result<(), JsValue> {
        let scenario = scenario.parse::<ScenarioId>().map_err(to_js_error)?;
        self.apply_view(ViewState {
            scenario,
            time_index,
            show_treatment,
        })
        .map_err(to_js_error)
    }

    /// Label van het huidige tijdpunt, bijvoorbeeld `2027-03`.
    #[wasm_bindgen]
    pub fn time_label(&self) -> Option<String> {
        self.analysis
            .as_ref()?
            .scenario(self.view.scenario)
            .timepoint_label(self.view.time_index)
            .map(str::to_owned)
    }

    #[wasm_bindgen]
    pub fn timepoint_count(&self) -> usize {
        self.analysis
            .as_ref()
            .map_or(0, |analysis| {
                analysis.scenario(self.view.scenario).timepoint_count()
            })
    }

    /// Plaatsing van alle regio-instanties voor het opbouwen van de scène.
    #[wasm_bindgen]
    pub fn get_regions(&self) -> Result<JsValue, JsValue> {
        let regions = self.region_placements().map_err(to_js_error)?;
        to_js_value(&regions)
    }

    /// Kleur en schaal per regio voor de huidige weergavetoestand.
    #[wasm_bindgen]
    pub fn get_region_states(&self) -> Result<JsValue, JsValue> {
        let states = self.region_states().map_err(to_js_error)?;
        to_js_value(&states)
    }

    #[wasm_bindgen]
    pub fn get_timeline(&self, scenario: &str) -> Result<JsValue, JsValue> {
        let scenario = scenario.parse::<ScenarioId>().map_err(to_js_error)?;
        let series = self.timeline(scenario).map_err(to_js_error)?;
        to_js_value(&series)
    }

    #[wasm_bindgen]
    pub fn get_treatment_plan(&self) -> Result<JsValue, JsValue> {
        let summary = self.treatment_plan_summary().map_err(to_js_error)?;
        to_js_value(&summary)
    }
}

impl Engine {
    pub fn load_analysis_str(&mut self, json: &str) -> Result<(), EngineError> {
        let analysis = parse::parse_str(json)?;
        self.load_analysis_result(analysis);
        Ok(())
    }

    /// Vervangt het analyse-resultaat. Scenario en tijdpunt gaan terug naar de
    /// standaardwaarden; de behandeltoggle blijft staan.
    pub fn load_analysis_result(&mut self, analysis: AnalysisResult) {
        debug_log!(
            "analyse geladen met {} regio-instanties",
            analysis.regions().len()
        );
        self.analysis = Some(analysis);
        self.view = ViewState::default().with_treatment(self.view.show_treatment);
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Vervangt de weergavetoestand na controle van de tijdindex.
    pub fn apply_view(&mut self, view: ViewState) -> Result<(), EngineError> {
        let len = self.loaded()?.scenario(view.scenario).timepoint_count();
        if view.time_index >= len {
            return Err(EngineError::TimeIndexOutOfRange {
                scenario: view.scenario,
                index: view.time_index,
                len,
            });
        }
        self.view = view;
        Ok(())
    }

    pub fn region_placements(&self) -> Result<Vec<RegionPlacement>, EngineError> {
        let analysis = self.loaded()?;
        Ok(placements(analysis.regions(), analysis.region_index()))
    }

    /// Regio-toestanden in payload-volgorde; regio's zonder data ontbreken.
    pub fn region_states(&self) -> Result<Vec<RegionStateExport>, EngineError> {
        let analysis = self.loaded()?;
        let projections = project_view(analysis, self.view)?;

        let states = analysis
            .regions()
            .iter()
            .filter_map(|region| {
                let projection = projections.get(&region.id)?;
                let color = projection.color();
                Some(RegionStateExport {
                    id: region.id.clone(),
                    health: projection.health,
                    scale: projection.scale,
                    color: color.to_css(),
                    rgb: color.to_rgb(),
                })
            })
            .collect();

        Ok(states)
    }

    pub fn timeline(&self, scenario: ScenarioId) -> Result<TimelineSeries, EngineError> {
        Ok(timeline_for(self.loaded()?, scenario)?)
    }

    pub fn treatment_plan_summary(&self) -> Result<TreatmentPlanSummary, EngineError> {
        Ok(TreatmentPlanSummary::from(self.loaded()?.treatment_plan()))
    }

    fn loaded(&self) -> Result<&AnalysisResult, EngineError> {
        self.analysis.as_ref().ok_or(EngineError::NotLoaded)
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(to_js_error)
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
