//! Regio-instanties en de afleiding van hun basisnaam.

use std::collections::BTreeMap;

use serde::Serialize;

/// Zijde waarop een regio-instantie ligt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Laterality {
    Left,
    Right,
    /// Geen herkende suffix; de id is zelf de basisnaam.
    Midline,
}

const LATERALITY_SUFFIXES: [(&str, Laterality); 2] =
    [("_left", Laterality::Left), ("_right", Laterality::Right)];

/// Splitst een instantie-id in basisnaam en zijde.
///
/// Alleen een afsluitende `_left` of `_right` (ASCII, hoofdletterongevoelig)
/// telt als zijde-aanduiding, zodat meerdelige namen als
/// `entorhinal_cortex_left` hun volledige basisnaam behouden.
#[must_use]
pub fn split_laterality(id: &str) -> (&str, Laterality) {
    for (suffix, side) in LATERALITY_SUFFIXES {
        if id.len() <= suffix.len() {
            continue;
        }
        let split = id.len() - suffix.len();
        if id.is_char_boundary(split) && id[split..].eq_ignore_ascii_case(suffix) {
            return (&id[..split], side);
        }
    }
    (id, Laterality::Midline)
}

/// Een concrete regio in de scène, met positie en weergavegrootte.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionInstance {
    pub id: String,
    pub name: String,
    pub position: [f64; 3],
    pub size: f64,
    /// Informatief payloadveld; de weergave leidt kleur af uit de projectie.
    pub severity: f64,
    /// Informatief payloadveld, zie `severity`.
    pub color: String,
}

impl RegionInstance {
    #[must_use]
    pub fn laterality(&self) -> Laterality {
        split_laterality(&self.id).1
    }
}

/// Vaste koppeling instantie-id → basisnaam, eenmalig opgebouwd bij het laden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionIndex {
    base_names: BTreeMap<String, String>,
}

impl RegionIndex {
    #[must_use]
    pub fn build(instances: &[RegionInstance]) -> Self {
        instances
            .iter()
            .map(|instance| instance.id.as_str())
            .collect()
    }

    #[must_use]
    pub fn base_name(&self, instance_id: &str) -> Option<&str> {
        self.base_names.get(instance_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.base_names
            .iter()
            .map(|(id, base)| (id.as_str(), base.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.base_names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base_names.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for RegionIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let base_names = iter
            .into_iter()
            .map(|id| (id.to_owned(), split_laterality(id).0.to_owned()))
            .collect();
        Self { base_names }
    }
}
