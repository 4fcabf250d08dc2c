//! Kern datastructuren voor een geladen analyse-resultaat.
//!
//! Alles in deze module wordt één keer per analyse opgebouwd en daarna
//! alleen nog gelezen.

pub mod region;
pub mod scenario;
pub mod treatment;

pub use region::{Laterality, RegionIndex, RegionInstance, split_laterality};
pub use scenario::{RegionDataset, Scenario, ScenarioId, UnknownScenarioError};
pub use treatment::{Treatment, TreatmentEffect, TreatmentPlan};

/// Volledig analyse-resultaat zoals het door de analyseservice is aangeleverd.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    regions: Vec<RegionInstance>,
    region_index: RegionIndex,
    scenario_a: Scenario,
    scenario_b: Scenario,
    treatment_plan: TreatmentPlan,
}

impl AnalysisResult {
    /// Bouwt het resultaat op en leidt de regio-index eenmalig af.
    #[must_use]
    pub fn new(
        regions: Vec<RegionInstance>,
        scenario_a: Scenario,
        scenario_b: Scenario,
        treatment_plan: TreatmentPlan,
    ) -> Self {
        let region_index = RegionIndex::build(&regions);
        Self {
            regions,
            region_index,
            scenario_a,
            scenario_b,
            treatment_plan,
        }
    }

    #[must_use]
    pub fn regions(&self) -> &[RegionInstance] {
        &self.regions
    }

    #[must_use]
    pub fn region_index(&self) -> &RegionIndex {
        &self.region_index
    }

    #[must_use]
    pub fn scenario(&self, id: ScenarioId) -> &Scenario {
        match id {
            ScenarioId::A => &self.scenario_a,
            ScenarioId::B => &self.scenario_b,
        }
    }

    #[must_use]
    pub fn treatment_plan(&self) -> &TreatmentPlan {
        &self.treatment_plan
    }

    /// Behandeleffect voor het gegeven scenario, indien aanwezig.
    #[must_use]
    pub fn treatment_effect(&self, id: ScenarioId) -> Option<&TreatmentEffect> {
        self.treatment_plan.effect(id)
    }
}
