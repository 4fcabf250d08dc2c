//! Projectie van een scenario op een tijdpunt naar gezondheid en schaal per
//! regio-instantie.
//!
//! Het behandeleffect is één scenario-brede delta afgeleid uit de cognitieve
//! reeksen, die uniform op alle regio's wordt toegepast. De per-regio
//! werkzaamheid uit het behandelplan speelt hier geen rol.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::model::{RegionIndex, Scenario, TreatmentEffect};

use super::severity::{HslColor, severity_color};

/// Gewicht waarmee het cognitieve verschil doorwerkt in regio-gezondheid.
pub const TREATMENT_DELTA_WEIGHT: f64 = 0.5;
/// Schaal van een volledig aangetaste regio; gezonde regio's naderen 1.0.
pub const MIN_SCALE: f64 = 0.5;

/// Visuele toestand van één regio-instantie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionProjection {
    /// Onbehandelde waarde uit de scenarioreeks.
    pub base_health: f64,
    /// Waarde na toepassing van het behandeleffect.
    pub health: f64,
    pub scale: f64,
}

impl RegionProjection {
    #[must_use]
    pub fn color(&self) -> HslColor {
        severity_color(self.health)
    }
}

/// Projectie per instantie-id.
pub type ProjectionMap = BTreeMap<String, RegionProjection>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("tijdindex {index} valt buiten de reeks van `{series}` (lengte {len})")]
    TimeIndexOutOfRange {
        series: String,
        index: usize,
        len: usize,
    },
}

/// Schaalfactor voor atrofie-weergave.
#[must_use]
pub fn atrophy_scale(health: f64) -> f64 {
    MIN_SCALE + health * (1.0 - MIN_SCALE)
}

/// Scenario-brede delta door behandeling op `time_index`.
///
/// Geeft `None` wanneer een van beide cognitieve reeksen geen bruikbare waarde
/// heeft op dat tijdpunt: ontbrekend, niet eindig of buiten [0, 1].
#[must_use]
pub fn treatment_delta(
    scenario: &Scenario,
    treatment: &TreatmentEffect,
    time_index: usize,
) -> Option<f64> {
    let in_unit_range = |value: &f64| (0.0..=1.0).contains(value);
    let treated = treatment.cognitive_at(time_index).filter(in_unit_range)?;
    let untreated = scenario.cognitive_at(time_index).filter(in_unit_range)?;
    Some((treated - untreated) * TREATMENT_DELTA_WEIGHT)
}

/// Berekent de visuele toestand voor alle instanties in `index`.
///
/// Instanties waarvan de basisnaam geen reeks heeft in het scenario worden
/// overgeslagen. Een `time_index` buiten de reeks is een fout van de aanroeper
/// en wordt niet begrensd.
pub fn project(
    index: &RegionIndex,
    scenario: &Scenario,
    treatment: Option<&TreatmentEffect>,
    time_index: usize,
    treatment_enabled: bool,
) -> Result<ProjectionMap, ProjectionError> {
    if time_index >= scenario.timepoint_count() {
        return Err(ProjectionError::TimeIndexOutOfRange {
            series: "timepoints".to_owned(),
            index: time_index,
            len: scenario.timepoint_count(),
        });
    }

    let delta = match treatment {
        Some(treatment) if treatment_enabled => {
            let delta = treatment_delta(scenario, treatment, time_index);
            if delta.is_none() {
                log::warn!(
                    "behandeleffect ontbreekt op tijdindex {time_index}; onbehandelde waarden worden gebruikt"
                );
            }
            delta
        }
        _ => None,
    };

    let mut projections = ProjectionMap::new();
    for (instance_id, base_name) in index.iter() {
        let Some(series) = scenario.region_series(base_name) else {
            log::debug!("geen progressiedata voor `{instance_id}` (basis `{base_name}`)");
            continue;
        };

        let base_health = *series.get(time_index).ok_or_else(|| {
            ProjectionError::TimeIndexOutOfRange {
                series: base_name.to_owned(),
                index: time_index,
                len: series.len(),
            }
        })?;

        let health = match delta {
            Some(delta) => (base_health + delta).min(1.0),
            None => base_health,
        };

        projections.insert(
            instance_id.to_owned(),
            RegionProjection {
                base_health,
                health,
                scale: atrophy_scale(health),
            },
        );
    }

    Ok(projections)
}
