//! Parser voor het JSON-analyseresultaat van de analyseservice.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    AnalysisResult, RegionDataset, RegionInstance, Scenario, ScenarioId, Treatment,
    TreatmentEffect, TreatmentPlan,
};

/// Result type voor het parsen van een analyse-payload.
pub type ParseResult<T> = Result<T, ParseError>;

/// Beschrijft fouten tijdens het parsen en valideren.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Het JSON-document kon niet gede-serialiseerd worden.
    #[error("JSON parsefout: {0}")]
    Json(#[from] serde_json::Error),
    /// Een scenario zonder tijdpunten kan niet geprojecteerd worden.
    #[error("scenario `{}` bevat geen tijdpunten", .scenario.payload_key())]
    EmptyTimeline { scenario: ScenarioId },
    #[error(
        "scenario `{}`: regio `{region}` heeft {found} waarden, verwacht {expected}",
        .scenario.payload_key()
    )]
    RegionSeriesLength {
        scenario: ScenarioId,
        region: String,
        expected: usize,
        found: usize,
    },
    #[error(
        "scenario `{}`: cognitieve reeks heeft {found} waarden, verwacht {expected}",
        .scenario.payload_key()
    )]
    CognitiveSeriesLength {
        scenario: ScenarioId,
        expected: usize,
        found: usize,
    },
    /// Gezondheidswaarden moeten eindig zijn en binnen [0, 1] liggen.
    #[error(
        "scenario `{}`: waarde {value} in reeks `{series}` op index {index} ligt buiten [0, 1]",
        .scenario.payload_key()
    )]
    ValueOutOfRange {
        scenario: ScenarioId,
        series: String,
        index: usize,
        value: f64,
    },
    #[error("regio-id `{0}` komt meerdere keren voor")]
    DuplicateRegion(String),
}

/// Leest een analyse-payload en converteert het naar een [`AnalysisResult`].
pub fn parse_str(input: &str) -> ParseResult<AnalysisResult> {
    log::debug!("Start parsing analyse-payload ({} bytes)", input.len());
    let document: AnalysisDocument = serde_json::from_str(input)?;
    document.into_result()
}

#[derive(Debug, Deserialize)]
struct AnalysisDocument {
    affected_regions: Vec<RegionDto>,
    scenario_a: ScenarioDto,
    scenario_b: ScenarioDto,
    treatment_plan: TreatmentPlanDto,
}

#[derive(Debug, Deserialize)]
struct RegionDto {
    id: String,
    name: String,
    x: f64,
    y: f64,
    z: f64,
    size: f64,
    severity: f64,
    color: String,
}

#[derive(Debug, Deserialize)]
struct ScenarioDto {
    name: String,
    description: String,
    timepoints: Vec<String>,
    regions: BTreeMap<String, Vec<f64>>,
    cognitive_function: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct TreatmentPlanDto {
    treatments: Vec<TreatmentDto>,
    effects: EffectsDto,
    confidence: f64,
    reasoning: Vec<String>,
    description: String,
}

#[derive(Debug, Deserialize)]
struct TreatmentDto {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    efficacy: BTreeMap<String, f64>,
    #[serde(default)]
    side_effects: f64,
    #[serde(default)]
    cost: f64,
}

#[derive(Debug, Deserialize)]
struct EffectsDto {
    #[serde(default)]
    scenario_a: Option<TreatmentEffectDto>,
    #[serde(default)]
    scenario_b: Option<TreatmentEffectDto>,
}

#[derive(Debug, Deserialize)]
struct TreatmentEffectDto {
    cognitive_function: Vec<f64>,
    #[serde(default)]
    improvement: Vec<f64>,
}

impl AnalysisDocument {
    fn into_result(self) -> ParseResult<AnalysisResult> {
        let AnalysisDocument {
            affected_regions,
            scenario_a,
            scenario_b,
            treatment_plan,
        } = self;

        let regions = build_regions(affected_regions)?;
        let scenario_a = build_scenario(ScenarioId::A, scenario_a)?;
        let scenario_b = build_scenario(ScenarioId::B, scenario_b)?;
        let treatment_plan = build_treatment_plan(treatment_plan, &scenario_a, &scenario_b);

        log::debug!(
            "Analyse geladen: {} regio's, {} + {} tijdpunten, {} behandelingen",
            regions.len(),
            scenario_a.timepoint_count(),
            scenario_b.timepoint_count(),
            treatment_plan.treatments.len()
        );

        Ok(AnalysisResult::new(
            regions,
            scenario_a,
            scenario_b,
            treatment_plan,
        ))
    }
}

fn build_regions(regions: Vec<RegionDto>) -> ParseResult<Vec<RegionInstance>> {
    let mut seen = HashSet::with_capacity(regions.len());
    let mut instances = Vec::with_capacity(regions.len());

    for region in regions {
        if !seen.insert(region.id.clone()) {
            return Err(ParseError::DuplicateRegion(region.id));
        }
        instances.push(RegionInstance {
            id: region.id,
            name: region.name,
            position: [region.x, region.y, region.z],
            size: region.size,
            severity: region.severity,
            color: region.color,
        });
    }

    Ok(instances)
}

fn build_scenario(id: ScenarioId, dto: ScenarioDto) -> ParseResult<Scenario> {
    let expected = dto.timepoints.len();
    if expected == 0 {
        return Err(ParseError::EmptyTimeline { scenario: id });
    }

    for (region, values) in &dto.regions {
        if values.len() != expected {
            return Err(ParseError::RegionSeriesLength {
                scenario: id,
                region: region.clone(),
                expected,
                found: values.len(),
            });
        }
        check_unit_range(id, region, values)?;
    }

    if dto.cognitive_function.len() != expected {
        return Err(ParseError::CognitiveSeriesLength {
            scenario: id,
            expected,
            found: dto.cognitive_function.len(),
        });
    }
    check_unit_range(id, "cognitive_function", &dto.cognitive_function)?;

    Ok(Scenario {
        name: dto.name,
        description: dto.description,
        timepoints: dto.timepoints,
        regions: dto.regions.into_iter().collect::<RegionDataset>(),
        cognitive_function: dto.cognitive_function,
    })
}

fn first_outside_unit_range(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .position(|value| !(0.0..=1.0).contains(value))
}

fn check_unit_range(id: ScenarioId, series: &str, values: &[f64]) -> ParseResult<()> {
    match first_outside_unit_range(values) {
        Some(index) => Err(ParseError::ValueOutOfRange {
            scenario: id,
            series: series.to_owned(),
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

fn build_treatment_plan(
    dto: TreatmentPlanDto,
    scenario_a: &Scenario,
    scenario_b: &Scenario,
) -> TreatmentPlan {
    let TreatmentPlanDto {
        treatments,
        effects,
        confidence,
        reasoning,
        description,
    } = dto;

    let treatments = treatments
        .into_iter()
        .map(|treatment| Treatment {
            id: treatment.id,
            name: treatment.name,
            description: treatment.description,
            efficacy: treatment.efficacy,
            side_effects: treatment.side_effects,
            cost: treatment.cost,
        })
        .collect();

    TreatmentPlan {
        treatments,
        description,
        effect_a: build_effect(ScenarioId::A, effects.scenario_a, scenario_a),
        effect_b: build_effect(ScenarioId::B, effects.scenario_b, scenario_b),
        confidence,
        reasoning,
    }
}

// Een afwijkende lengte wordt bewaard; de projectie valt per tijdpunt terug op
// de onbehandelde waarde. Waarden buiten [0, 1] maken het effect onbruikbaar.
fn build_effect(
    id: ScenarioId,
    dto: Option<TreatmentEffectDto>,
    scenario: &Scenario,
) -> Option<TreatmentEffect> {
    let Some(dto) = dto else {
        log::warn!("geen behandeleffect voor scenario `{id}`");
        return None;
    };

    if let Some(index) = first_outside_unit_range(&dto.cognitive_function) {
        log::warn!(
            "behandeleffect voor scenario `{id}` genegeerd: waarde {} op index {index} ligt buiten [0, 1]",
            dto.cognitive_function[index]
        );
        return None;
    }

    if dto.cognitive_function.len() != scenario.timepoint_count() {
        log::warn!(
            "behandeleffect voor scenario `{id}` heeft {} waarden, verwacht {}",
            dto.cognitive_function.len(),
            scenario.timepoint_count()
        );
    }

    Some(TreatmentEffect {
        cognitive_function: dto.cognitive_function,
        improvement: dto.improvement,
    })
}

#[cfg(test)]
mod tests {
    use super::{ParseError, parse_str};
    use crate::model::ScenarioId;

    const MINIMAL: &str = r#"{
        "affected_regions": [
            {"id": "hippocampus_left", "name": "Hippocampus (Left)", "x": 35, "y": 45, "z": 30, "size": 5, "severity": 0.3, "color": "rgb(0, 105, 178)"},
            {"id": "hippocampus_right", "name": "Hippocampus (Right)", "x": 65, "y": 45, "z": 30, "size": 5, "severity": 0.3, "color": "rgb(0, 105, 178)"}
        ],
        "scenario_a": {
            "name": "Typical Progression",
            "description": "",
            "timepoints": ["2025-03", "2026-03"],
            "regions": {"hippocampus": [0.7, 0.65]},
            "cognitive_function": [0.8, 0.76]
        },
        "scenario_b": {
            "name": "Accelerated Progression",
            "description": "",
            "timepoints": ["2025-03", "2026-03"],
            "regions": {"hippocampus": [0.7, 0.61]},
            "cognitive_function": [0.8, 0.73]
        },
        "treatment_plan": {
            "treatments": [{"id": "lifestyle_changes", "name": "Lifestyle Modifications", "side_effects": 0, "cost": 1}],
            "effects": {
                "scenario_a": {"cognitive_function": [0.8, 0.77], "improvement": [0, 1]}
            },
            "confidence": 0.85,
            "reasoning": ["because"],
            "description": "plan"
        }
    }"#;

    #[test]
    fn parses_minimal_payload() {
        let analysis = parse_str(MINIMAL).expect("minimal payload parses");

        assert_eq!(analysis.regions().len(), 2);
        assert_eq!(analysis.regions()[0].position, [35.0, 45.0, 30.0]);
        assert_eq!(
            analysis.region_index().base_name("hippocampus_right"),
            Some("hippocampus")
        );
        assert_eq!(analysis.scenario(ScenarioId::B).name, "Accelerated Progression");
        assert!(analysis.treatment_effect(ScenarioId::A).is_some());
        assert!(analysis.treatment_effect(ScenarioId::B).is_none());

        let treatment = &analysis.treatment_plan().treatments[0];
        assert!(treatment.efficacy.is_empty());
        assert!((treatment.cost - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_region_series_with_wrong_length() {
        let payload = MINIMAL.replace("[0.7, 0.61]", "[0.7]");
        match parse_str(&payload) {
            Err(ParseError::RegionSeriesLength {
                scenario,
                region,
                expected,
                found,
            }) => {
                assert_eq!(scenario, ScenarioId::B);
                assert_eq!(region, "hippocampus");
                assert_eq!((expected, found), (2, 1));
            }
            other => panic!("verwacht RegionSeriesLength, kreeg {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_health() {
        let payload = MINIMAL.replace("[0.7, 0.65]", "[0.7, 1.5]");
        assert!(matches!(
            parse_str(&payload),
            Err(ParseError::ValueOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_region_ids() {
        let payload = MINIMAL.replace("\"hippocampus_right\"", "\"hippocampus_left\"");
        assert!(matches!(
            parse_str(&payload),
            Err(ParseError::DuplicateRegion(id)) if id == "hippocampus_left"
        ));
    }

    #[test]
    fn rejects_empty_timeline() {
        let payload = MINIMAL
            .replacen("[\"2025-03\", \"2026-03\"]", "[]", 1)
            .replacen("[0.7, 0.65]", "[]", 1)
            .replacen("[0.8, 0.76]", "[]", 1);
        assert!(matches!(
            parse_str(&payload),
            Err(ParseError::EmptyTimeline {
                scenario: ScenarioId::A
            })
        ));
    }

    #[test]
    fn rejects_cognitive_series_with_wrong_length() {
        let payload = MINIMAL.replace("[0.8, 0.73]", "[0.8]");
        match parse_str(&payload) {
            Err(err @ ParseError::CognitiveSeriesLength { .. }) => {
                assert!(matches!(
                    err,
                    ParseError::CognitiveSeriesLength {
                        scenario: ScenarioId::B,
                        expected: 2,
                        found: 1,
                    }
                ));
                assert!(err.to_string().starts_with("scenario `scenario_b`"));
            }
            other => panic!("verwacht CognitiveSeriesLength, kreeg {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_timeline_in_second_scenario() {
        let scenario_b = r#""timepoints": ["2025-03", "2026-03"],
            "regions": {"hippocampus": [0.7, 0.61]},
            "cognitive_function": [0.8, 0.73]"#;
        assert!(MINIMAL.contains(scenario_b));
        let payload = MINIMAL.replace(
            scenario_b,
            r#""timepoints": [],
            "regions": {"hippocampus": []},
            "cognitive_function": []"#,
        );
        let err = parse_str(&payload).unwrap_err();
        assert!(matches!(
            err,
            ParseError::EmptyTimeline {
                scenario: ScenarioId::B
            }
        ));
        assert_eq!(
            err.to_string(),
            "scenario `scenario_b` bevat geen tijdpunten"
        );
    }

    #[test]
    fn drops_treatment_effect_with_values_outside_unit_range() {
        for series in ["[0.8, -1.0]", "[-0.005, 0.77]", "[0.8, 3.0]"] {
            let payload = MINIMAL.replace("[0.8, 0.77]", series);
            let analysis = parse_str(&payload).expect("scenarios remain valid");
            assert!(
                analysis.treatment_effect(ScenarioId::A).is_none(),
                "{series} moet het effect verwerpen"
            );
        }
    }

    #[test]
    fn keeps_treatment_effect_with_mismatched_length() {
        let payload = MINIMAL.replace("[0.8, 0.77]", "[0.8]");
        let analysis = parse_str(&payload).expect("mismatch is tolerated");
        let effect = analysis
            .treatment_effect(ScenarioId::A)
            .expect("effect retained");
        assert_eq!(effect.cognitive_function.len(), 1);
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(parse_str("{"), Err(ParseError::Json(_))));
    }
}
