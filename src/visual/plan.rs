//! Samenvatting van het behandelplan voor weergave naast de grafiek.

use serde::Serialize;

use crate::model::TreatmentPlan;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreatmentItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreatmentPlanSummary {
    pub headline: String,
    pub confidence_percent: i64,
    pub description: String,
    pub treatments: Vec<TreatmentItem>,
    pub reasoning: Vec<String>,
}

impl From<&TreatmentPlan> for TreatmentPlanSummary {
    fn from(plan: &TreatmentPlan) -> Self {
        Self {
            headline: plan.headline(),
            confidence_percent: plan.confidence_percent(),
            description: plan.description.clone(),
            treatments: plan
                .treatments
                .iter()
                .map(|treatment| TreatmentItem {
                    name: treatment.name.clone(),
                    description: treatment.description.clone(),
                })
                .collect(),
            reasoning: plan.reasoning.clone(),
        }
    }
}
