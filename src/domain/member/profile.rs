//! MemberProfile - candidate attributes for one optimization run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{Role, TraitProfile};

fn default_availability() -> f64 {
    1.0
}

/// A candidate member of the pool.
///
/// Immutable once built and owned exclusively by the run that loads it.
/// Every attribute other than `id` is optional at the source; the defaults
/// are documented on the builder: `Unknown` role, no traits (neutral 0.5s
/// wherever a profile is required), empty skill set, no reported
/// experience, full availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    id: String,
    #[serde(default)]
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    traits: Option<TraitProfile>,
    #[serde(default)]
    skills: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    experience_years: Option<f64>,
    #[serde(default = "default_availability")]
    availability: f64,
}

impl MemberProfile {
    /// Starts building a profile for the given caller-owned identifier.
    pub fn builder(id: impl Into<String>) -> MemberProfileBuilder {
        MemberProfileBuilder::new(id)
    }

    /// The caller-owned opaque identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The member's functional role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The reported trait profile, if any.
    pub fn traits(&self) -> Option<&TraitProfile> {
        self.traits.as_ref()
    }

    /// The effective trait profile: reported traits, or neutral defaults.
    pub fn trait_profile(&self) -> TraitProfile {
        self.traits.unwrap_or(TraitProfile::NEUTRAL)
    }

    /// The case-normalized skill set.
    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    /// Years of experience, if reported. Never negative.
    pub fn experience_years(&self) -> Option<f64> {
        self.experience_years
    }

    /// Availability fraction in [0, 1].
    pub fn availability(&self) -> f64 {
        self.availability
    }
}

/// Builder for [`MemberProfile`].
#[derive(Debug, Clone)]
pub struct MemberProfileBuilder {
    id: String,
    role: Role,
    traits: Option<TraitProfile>,
    skills: BTreeSet<String>,
    experience_years: Option<f64>,
    availability: f64,
}

impl MemberProfileBuilder {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Unknown,
            traits: None,
            skills: BTreeSet::new(),
            experience_years: None,
            availability: 1.0,
        }
    }

    /// Sets the member's role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the role from a free-form label (tolerant parse).
    pub fn role_name(self, raw: &str) -> Self {
        self.role(Role::parse(raw))
    }

    /// Sets the trait profile.
    pub fn traits(mut self, profile: TraitProfile) -> Self {
        self.traits = Some(profile);
        self
    }

    /// Adds a single skill, case-normalized. Blank skills are ignored.
    pub fn skill(mut self, skill: impl AsRef<str>) -> Self {
        let normalized = skill.as_ref().trim().to_lowercase();
        if !normalized.is_empty() {
            self.skills.insert(normalized);
        }
        self
    }

    /// Adds several skills, each case-normalized.
    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for skill in skills {
            self = self.skill(skill);
        }
        self
    }

    /// Sets reported experience, clamped to be non-negative.
    pub fn experience_years(mut self, years: f64) -> Self {
        self.experience_years = Some(years.max(0.0));
        self
    }

    /// Sets availability, clamped to [0, 1].
    pub fn availability(mut self, availability: f64) -> Self {
        self.availability = availability.clamp(0.0, 1.0);
        self
    }

    /// Builds the immutable profile.
    pub fn build(self) -> MemberProfile {
        MemberProfile {
            id: self.id,
            role: self.role,
            traits: self.traits,
            skills: self.skills,
            experience_years: self.experience_years,
            availability: self.availability,
        }
    }
}
