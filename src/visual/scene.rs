//! Plaatsing van regio-instanties in scènecoördinaten.

use serde::Serialize;

use crate::model::{Laterality, RegionIndex, RegionInstance};

use super::severity::{HslColor, severity_color};

/// Payloadcoördinaten lopen van 0 tot 100; de scène is rond de oorsprong gecentreerd.
pub const COORDINATE_CENTER: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPlacement {
    pub id: String,
    pub name: String,
    pub base_name: String,
    pub laterality: Laterality,
    pub position: [f64; 3],
    pub radius: f64,
    /// Startkleur; regio's beginnen als gezond.
    pub color: HslColor,
}

#[must_use]
pub fn center_position(position: [f64; 3]) -> [f64; 3] {
    position.map(|axis| axis - COORDINATE_CENTER)
}

#[must_use]
pub fn placements(instances: &[RegionInstance], index: &RegionIndex) -> Vec<RegionPlacement> {
    let initial = severity_color(1.0);
    instances
        .iter()
        .map(|instance| RegionPlacement {
            id: instance.id.clone(),
            name: instance.name.clone(),
            base_name: index
                .base_name(&instance.id)
                .unwrap_or(instance.id.as_str())
                .to_owned(),
            laterality: instance.laterality(),
            position: center_position(instance.position),
            radius: instance.size,
            color: initial,
        })
        .collect()
}
