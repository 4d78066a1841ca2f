//! Big Five personality profile value objects.
//!
//! The five canonical dimensions (openness, conscientiousness, extraversion,
//! agreeableness, neuroticism), each normalized to the unit interval.

use serde::{Deserialize, Serialize};

/// One of the five canonical personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitDimension {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl TraitDimension {
    /// All five dimensions, in canonical order.
    pub const ALL: [TraitDimension; 5] = [
        TraitDimension::Openness,
        TraitDimension::Conscientiousness,
        TraitDimension::Extraversion,
        TraitDimension::Agreeableness,
        TraitDimension::Neuroticism,
    ];

    /// Returns the display label for this dimension.
    pub fn label(&self) -> &'static str {
        match self {
            TraitDimension::Openness => "openness",
            TraitDimension::Conscientiousness => "conscientiousness",
            TraitDimension::Extraversion => "extraversion",
            TraitDimension::Agreeableness => "agreeableness",
            TraitDimension::Neuroticism => "neuroticism",
        }
    }
}

/// A member's scored Big Five profile.
///
/// Members that report no traits are treated as `NEUTRAL` (0.5 on every
/// dimension) wherever a profile is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitProfile {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl TraitProfile {
    /// The neutral profile used when a member reports no traits.
    pub const NEUTRAL: Self = Self {
        openness: 0.5,
        conscientiousness: 0.5,
        extraversion: 0.5,
        agreeableness: 0.5,
        neuroticism: 0.5,
    };

    /// Creates a profile with every dimension clamped to the unit interval.
    pub fn new(
        openness: f64,
        conscientiousness: f64,
        extraversion: f64,
        agreeableness: f64,
        neuroticism: f64,
    ) -> Self {
        Self {
            openness: openness.clamp(0.0, 1.0),
            conscientiousness: conscientiousness.clamp(0.0, 1.0),
            extraversion: extraversion.clamp(0.0, 1.0),
            agreeableness: agreeableness.clamp(0.0, 1.0),
            neuroticism: neuroticism.clamp(0.0, 1.0),
        }
    }

    /// Returns the value for one dimension.
    pub fn get(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Openness => self.openness,
            TraitDimension::Conscientiousness => self.conscientiousness,
            TraitDimension::Extraversion => self.extraversion,
            TraitDimension::Agreeableness => self.agreeableness,
            TraitDimension::Neuroticism => self.neuroticism,
        }
    }
}

impl Default for TraitProfile {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
