//! Font weight from the thickness control.
//!
//! Thickness is a 0–5 scalar, not a CSS property. The continuous policy
//! stretches it across the 400–900 weight range and adds a glow past 2.5 to
//! fake sub-step boldness; the discrete policy snaps half-point buckets
//! straight onto the nine weight steps.

use serde::{Deserialize, Serialize};

/// Lower bound of the thickness control.
pub const THICKNESS_MIN: f32 = 0.0;
/// Upper bound of the thickness control.
pub const THICKNESS_MAX: f32 = 5.0;

/// Clamp a raw thickness value into the control range. NaN collapses to the
/// minimum rather than poisoning the weight math.
pub fn clamp_thickness(t: f32) -> f32 {
    if t.is_nan() {
        THICKNESS_MIN
    } else {
        t.clamp(THICKNESS_MIN, THICKNESS_MAX)
    }
}

/// Concentric glow radii rendered in the current text color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub blur_px: f32,
    pub spread_px: f32,
}

/// Computed weight plus the optional glow effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextWeight {
    /// CSS-style weight, always within [100, 900].
    pub weight: u16,
    pub glow: Option<Glow>,
}

/// Weight strategy, one per observed display variant. The two are mutually
/// exclusive configuration choices, never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// `round(400 + t*100)` clamped to [400, 900], glow past 2.5.
    #[default]
    Continuous,
    /// Half-point buckets mapping onto weights 100–900, no glow.
    Discrete,
}

const DISCRETE_TABLE: &[(f32, u16)] = &[
    (0.5, 100),
    (1.0, 200),
    (1.5, 300),
    (2.0, 400),
    (2.5, 500),
    (3.0, 600),
    (3.5, 700),
    (4.0, 800),
];

/// Thickness at which the continuous policy starts glowing.
const GLOW_ONSET: f32 = 2.5;

impl WeightPolicy {
    /// Compute the weight (and glow, for the continuous policy) for a raw
    /// thickness value. Out-of-range input is clamped, never rejected.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn weight_for(self, thickness: f32) -> TextWeight {
        let t = clamp_thickness(thickness);
        match self {
            Self::Continuous => {
                let weight = (400.0 + t * 100.0).round().clamp(400.0, 900.0) as u16;
                // At exactly 2.5 both radii are zero, so that point counts
                // as no glow.
                let glow = if t <= GLOW_ONSET {
                    None
                } else {
                    Some(Glow {
                        blur_px: (t - GLOW_ONSET) * 0.2,
                        spread_px: (t - GLOW_ONSET) * 0.5,
                    })
                };
                TextWeight { weight, glow }
            }
            Self::Discrete => {
                let weight = DISCRETE_TABLE
                    .iter()
                    .find(|&&(max, _)| t <= max)
                    .map_or(900, |&(_, w)| w);
                TextWeight { weight, glow: None }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_endpoints() {
        let p = WeightPolicy::Continuous;
        assert_eq!(p.weight_for(0.0).weight, 400);
        assert_eq!(p.weight_for(5.0).weight, 900);
        assert_eq!(p.weight_for(2.5).weight, 650);
    }

    #[test]
    fn test_continuous_glow_onset() {
        let p = WeightPolicy::Continuous;
        assert!(p.weight_for(2.5).glow.is_none());

        let glow = p.weight_for(2.6).glow.expect("glow past onset");
        assert!(glow.blur_px > 0.0);
        assert!(glow.spread_px > 0.0);
        assert!((glow.spread_px - glow.blur_px * 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_continuous_glow_at_max() {
        let glow = WeightPolicy::Continuous.weight_for(5.0).glow.unwrap();
        assert!((glow.blur_px - 0.5).abs() < 1e-6);
        assert!((glow.spread_px - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_continuous_clamps_out_of_range() {
        let p = WeightPolicy::Continuous;
        assert_eq!(p.weight_for(-3.0).weight, 400);
        assert_eq!(p.weight_for(12.0).weight, 900);
        assert_eq!(p.weight_for(f32::NAN).weight, 400);
    }

    #[test]
    fn test_discrete_table() {
        let p = WeightPolicy::Discrete;
        assert_eq!(p.weight_for(0.5).weight, 100);
        assert_eq!(p.weight_for(1.0).weight, 200);
        assert_eq!(p.weight_for(2.0).weight, 400);
        assert_eq!(p.weight_for(4.0).weight, 800);
        assert_eq!(p.weight_for(4.1).weight, 900);
        assert_eq!(p.weight_for(5.0).weight, 900);
    }

    #[test]
    fn test_discrete_never_glows() {
        let p = WeightPolicy::Discrete;
        assert!(p.weight_for(5.0).glow.is_none());
        assert!(p.weight_for(3.3).glow.is_none());
    }

    #[test]
    fn test_weight_always_in_range() {
        for policy in [WeightPolicy::Continuous, WeightPolicy::Discrete] {
            for step in -30..=60 {
                #[allow(clippy::cast_precision_loss)]
                let t = step as f32 * 0.25;
                let w = policy.weight_for(t).weight;
                assert!((100..=900).contains(&w), "{policy:?} out of range at {t}");
            }
        }
    }
}
