//! Kleurcodering van gezondheidswaarden.
//!
//! Gezond (1.0) wordt lichtblauw, ernstig aangetast (0.0) donkerblauw. Alleen
//! de lichtheid varieert; tint en verzadiging liggen vast.

use std::fmt;

use serde::Serialize;

pub const SEVERITY_HUE: f64 = 210.0;
pub const SEVERITY_SATURATION: f64 = 80.0;
pub const MIN_LIGHTNESS: f64 = 20.0;
pub const MAX_LIGHTNESS: f64 = 90.0;

/// HSL-kleur met tint in graden en verzadiging/lichtheid in procenten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslColor {
    /// CSS-notatie, bijvoorbeeld `hsl(210, 80%, 55%)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Genormaliseerde RGB-componenten in [0, 1].
    #[must_use]
    pub fn to_rgb(&self) -> [f64; 3] {
        hsl_to_rgb(
            self.hue.rem_euclid(360.0) / 360.0,
            (self.saturation / 100.0).clamp(0.0, 1.0),
            (self.lightness / 100.0).clamp(0.0, 1.0),
        )
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Zet een gezondheidswaarde om naar de bijbehorende ernstkleur.
///
/// Waarden buiten [0, 1] worden begrensd; een niet-eindige waarde geldt als
/// maximaal ernstig.
#[must_use]
pub fn severity_color(health: f64) -> HslColor {
    let lightness = if health.is_finite() {
        (MIN_LIGHTNESS + health * (MAX_LIGHTNESS - MIN_LIGHTNESS))
            .clamp(MIN_LIGHTNESS, MAX_LIGHTNESS)
    } else {
        MIN_LIGHTNESS
    };

    HslColor {
        hue: SEVERITY_HUE,
        saturation: SEVERITY_SATURATION,
        lightness,
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::{HslColor, MAX_LIGHTNESS, MIN_LIGHTNESS, severity_color};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "verwacht {expected}, kreeg {actual}"
        );
    }

    #[test]
    fn endpoints_map_to_lightness_bounds() {
        assert_close(severity_color(0.0).lightness, 20.0);
        assert_close(severity_color(1.0).lightness, 90.0);
        assert_close(severity_color(0.5).lightness, 55.0);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_close(severity_color(1.2).lightness, 90.0);
        assert_close(severity_color(-0.4).lightness, 20.0);
        assert_close(severity_color(f64::NAN).lightness, 20.0);
        assert_close(severity_color(f64::INFINITY).lightness, 20.0);
    }

    #[test]
    fn lightness_is_monotone_within_bounds() {
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=100 {
            let health = f64::from(step) / 100.0;
            let color = severity_color(health);
            assert!(color.lightness >= previous);
            assert!((MIN_LIGHTNESS..=MAX_LIGHTNESS).contains(&color.lightness));
            assert_close(color.hue, 210.0);
            assert_close(color.saturation, 80.0);
            previous = color.lightness;
        }
    }

    #[test]
    fn formats_as_css() {
        assert_eq!(severity_color(0.5).to_css(), "hsl(210, 80%, 55%)");
        assert_eq!(severity_color(1.0).to_css(), "hsl(210, 80%, 90%)");
    }

    #[test]
    fn converts_to_rgb() {
        let white = HslColor {
            hue: 0.0,
            saturation: 0.0,
            lightness: 100.0,
        };
        assert_eq!(white.to_rgb(), [1.0, 1.0, 1.0]);

        let [r, g, b] = severity_color(0.5).to_rgb();
        assert!(b > g && g > r, "blauwtint verwacht: {r} {g} {b}");
        assert_close(r, 0.19);
        assert_close(g, 0.55);
        assert_close(b, 0.91);
    }
}
