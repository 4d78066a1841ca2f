//! Score value object (unit interval).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// The lowest possible score.
    pub const ZERO: Self = Self(0.0);

    /// The highest possible score.
    pub const MAX: Self = Self(1.0);

    /// Creates a new Score, clamping to the unit interval.
    ///
    /// Non-finite input clamps to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_new_accepts_valid_values() {
        assert_eq!(Score::new(0.0).value(), 0.0);
        assert_eq!(Score::new(0.5).value(), 0.5);
        assert_eq!(Score::new(1.0).value(), 1.0);
    }

    #[test]
    fn score_new_clamps_out_of_range() {
        assert_eq!(Score::new(1.5).value(), 1.0);
        assert_eq!(Score::new(-0.2).value(), 0.0);
    }

    #[test]
    fn score_new_maps_non_finite_to_zero() {
        assert_eq!(Score::new(f64::NAN).value(), 0.0);
        assert_eq!(Score::new(f64::INFINITY).value(), 0.0);
    }

    #[test]
    fn score_displays_three_decimals() {
        assert_eq!(format!("{}", Score::new(0.75)), "0.750");
        assert_eq!(format!("{}", Score::ZERO), "0.000");
    }

    #[test]
    fn score_default_is_zero() {
        assert_eq!(Score::default(), Score::ZERO);
    }

    #[test]
    fn score_serializes_transparently() {
        let json = serde_json::to_string(&Score::new(0.25)).unwrap();
        assert_eq!(json, "0.25");
    }
}
