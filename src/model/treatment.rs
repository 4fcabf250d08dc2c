//! Behandelplan en de verwachte effecten per scenario.

use std::collections::BTreeMap;

use super::ScenarioId;

/// Een enkele behandeling binnen het plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Treatment {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Werkzaamheid per regio-basisnaam. Wordt geladen maar niet gebruikt
    /// door de projectie; zie `visual::projector`.
    pub efficacy: BTreeMap<String, f64>,
    pub side_effects: f64,
    pub cost: f64,
}

/// Cognitieve reeks onder behandeling, parallel aan de tijdpunten van een scenario.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreatmentEffect {
    pub cognitive_function: Vec<f64>,
    /// Informatief; de projectie leest dit niet.
    pub improvement: Vec<f64>,
}

impl TreatmentEffect {
    #[must_use]
    pub fn cognitive_at(&self, time_index: usize) -> Option<f64> {
        self.cognitive_function.get(time_index).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreatmentPlan {
    pub treatments: Vec<Treatment>,
    pub description: String,
    pub effect_a: Option<TreatmentEffect>,
    pub effect_b: Option<TreatmentEffect>,
    pub confidence: f64,
    pub reasoning: Vec<String>,
}

impl TreatmentPlan {
    #[must_use]
    pub fn effect(&self, id: ScenarioId) -> Option<&TreatmentEffect> {
        match id {
            ScenarioId::A => self.effect_a.as_ref(),
            ScenarioId::B => self.effect_b.as_ref(),
        }
    }

    /// Namen van alle behandelingen, samengevoegd met " + ".
    #[must_use]
    pub fn headline(&self) -> String {
        self.treatments
            .iter()
            .map(|treatment| treatment.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::{Treatment, TreatmentEffect, TreatmentPlan};
    use crate::model::ScenarioId;

    fn treatment(name: &str) -> Treatment {
        Treatment {
            name: name.to_owned(),
            ..Treatment::default()
        }
    }

    #[test]
    fn headline_joins_treatment_names() {
        let plan = TreatmentPlan {
            treatments: vec![
                treatment("Cholinesterase Inhibitors"),
                treatment("Lifestyle Modifications"),
            ],
            confidence: 0.85,
            ..TreatmentPlan::default()
        };

        assert_eq!(
            plan.headline(),
            "Cholinesterase Inhibitors + Lifestyle Modifications"
        );
        assert_eq!(plan.confidence_percent(), 85);
    }

    #[test]
    fn effect_lookup_follows_scenario() {
        let plan = TreatmentPlan {
            effect_b: Some(TreatmentEffect {
                cognitive_function: vec![0.8],
                improvement: vec![0.0],
            }),
            ..TreatmentPlan::default()
        };

        assert!(plan.effect(ScenarioId::A).is_none());
        assert_eq!(
            plan.effect(ScenarioId::B).and_then(|effect| effect.cognitive_at(0)),
            Some(0.8)
        );
    }
}
