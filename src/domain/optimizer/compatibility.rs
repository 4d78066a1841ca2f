//! Compatibility Model - Pairwise member fit scoring.
//!
//! Pure functions mapping two member profiles to a symmetric score in the
//! unit interval. The pair score is a weighted sum of four sub-scores:
//! personality alignment, role affinity, skill complementarity, and
//! experience balance. No state, no I/O, no randomness.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{Role, Score, TraitDimension};
use crate::domain::member::MemberProfile;

/// Weight of the personality sub-score in the pair score.
pub const PERSONALITY_WEIGHT: f64 = 0.35;
/// Weight of the role-affinity sub-score.
pub const ROLE_WEIGHT: f64 = 0.30;
/// Weight of the skill-complementarity sub-score.
pub const SKILL_WEIGHT: f64 = 0.25;
/// Weight of the experience-balance sub-score.
pub const EXPERIENCE_WEIGHT: f64 = 0.10;

/// Affinity for any pair involving an unknown role.
pub const ROLE_AFFINITY_DEFAULT: f64 = 0.5;

/// Hand-tuned role affinities.
///
/// The tuning constants below are directional; the table is symmetrized at
/// construction (mean of both directions) so lookups are order-independent.
static ROLE_AFFINITY: Lazy<HashMap<(Role, Role), f64>> = Lazy::new(|| {
    let directed: &[(Role, Role, f64)] = &[
        (Role::Developer, Role::Developer, 0.70),
        (Role::Developer, Role::Designer, 0.80),
        (Role::Developer, Role::ProductManager, 0.70),
        (Role::Developer, Role::Qa, 0.85),
        (Role::Developer, Role::Devops, 0.90),
        (Role::Designer, Role::Developer, 0.80),
        (Role::Designer, Role::Designer, 0.60),
        (Role::Designer, Role::ProductManager, 0.90),
        (Role::Designer, Role::Qa, 0.70),
        (Role::Designer, Role::Devops, 0.55),
        (Role::ProductManager, Role::Developer, 0.80),
        (Role::ProductManager, Role::Designer, 0.90),
        (Role::ProductManager, Role::ProductManager, 0.50),
        (Role::ProductManager, Role::Qa, 0.80),
        (Role::ProductManager, Role::Devops, 0.70),
        (Role::Qa, Role::Developer, 0.85),
        (Role::Qa, Role::Designer, 0.70),
        (Role::Qa, Role::ProductManager, 0.80),
        (Role::Qa, Role::Qa, 0.60),
        (Role::Qa, Role::Devops, 0.75),
        (Role::Devops, Role::Developer, 0.90),
        (Role::Devops, Role::Designer, 0.65),
        (Role::Devops, Role::ProductManager, 0.70),
        (Role::Devops, Role::Qa, 0.75),
        (Role::Devops, Role::Devops, 0.65),
    ];

    let mut table = HashMap::new();
    for &(a, b, value) in directed {
        let mirrored = directed
            .iter()
            .find(|&&(x, y, _)| x == b && y == a)
            .map(|&(_, _, v)| v)
            .unwrap_or(value);
        table.insert((a, b), (value + mirrored) / 2.0);
    }
    table
});

/// Pairwise compatibility scoring functions.
pub struct CompatibilityModel;

impl CompatibilityModel {
    /// Computes the compatibility score for a pair of members.
    ///
    /// # Algorithm
    /// score = 0.35·personality + 0.30·role + 0.25·skills + 0.10·experience,
    /// clamped to [0, 1].
    ///
    /// # Edge Cases
    /// - Missing traits: neutral 0.5 profile for the member
    /// - Unknown roles: neutral 0.5 affinity
    /// - Empty skill sets: neutral overlap ratio
    /// - Missing experience: neutral 0.5 balance
    pub fn pair_compatibility(a: &MemberProfile, b: &MemberProfile) -> Score {
        let weighted = Self::personality_alignment(a, b) * PERSONALITY_WEIGHT
            + Self::role_affinity(a.role(), b.role()) * ROLE_WEIGHT
            + Self::skill_complementarity(a, b) * SKILL_WEIGHT
            + Self::experience_balance(a, b) * EXPERIENCE_WEIGHT;
        Score::new(weighted)
    }

    /// Mean of the five per-trait contributions.
    ///
    /// Each dimension has its own comparison policy:
    /// - conscientiousness, agreeableness: closer is better, 1 − |Δ|
    /// - extraversion: a moderate gap scores 1.0, anything else 0.7
    /// - neuroticism: lower shared average is better, 1 − mean
    /// - openness: fixed neutral 0.8
    pub fn personality_alignment(a: &MemberProfile, b: &MemberProfile) -> f64 {
        let ta = a.trait_profile();
        let tb = b.trait_profile();
        let total: f64 = TraitDimension::ALL
            .iter()
            .map(|&dim| Self::trait_contribution(dim, ta.get(dim), tb.get(dim)))
            .sum();
        total / TraitDimension::ALL.len() as f64
    }

    fn trait_contribution(dimension: TraitDimension, a: f64, b: f64) -> f64 {
        match dimension {
            TraitDimension::Conscientiousness | TraitDimension::Agreeableness => 1.0 - (a - b).abs(),
            TraitDimension::Extraversion => {
                // moderate gap pairs initiators with listeners
                let gap = (a - b).abs() * 100.0;
                if (20.0..=50.0).contains(&gap) {
                    1.0
                } else {
                    0.7
                }
            }
            TraitDimension::Neuroticism => 1.0 - (a + b) / 2.0,
            TraitDimension::Openness => 0.8,
        }
    }

    /// Looks up the symmetrized role affinity for a pair of roles.
    pub fn role_affinity(a: Role, b: Role) -> f64 {
        ROLE_AFFINITY
            .get(&(a, b))
            .copied()
            .unwrap_or(ROLE_AFFINITY_DEFAULT)
    }

    /// Scores skill complementarity: a 30-50% overlap is the sweet spot.
    ///
    /// overlap component: 1.0 inside the sweet spot, 0.7 + ratio below it,
    /// 1.5 − ratio above it. Blended 60/40 with the unique-skill ratio.
    ///
    /// # Edge Cases
    /// - Either skill set empty: overlap ratio is a neutral 0.5
    /// - Both sets empty: unique ratio is a neutral 0.5
    pub fn skill_complementarity(a: &MemberProfile, b: &MemberProfile) -> f64 {
        let union = a.skills().union(b.skills()).count();
        let overlap = a.skills().intersection(b.skills()).count();

        let overlap_ratio = if a.skills().is_empty() || b.skills().is_empty() {
            0.5
        } else {
            overlap as f64 / union as f64
        };

        let overlap_component = if (0.3..=0.5).contains(&overlap_ratio) {
            1.0
        } else if overlap_ratio < 0.3 {
            0.7 + overlap_ratio
        } else {
            1.5 - overlap_ratio
        };

        let unique_ratio = if union == 0 {
            0.5
        } else {
            (union - overlap) as f64 / (2.0 * union as f64)
        };

        overlap_component * 0.6 + unique_ratio * 0.4
    }

    /// Scores experience balance: a 2-5 year gap is the ideal mix.
    ///
    /// # Edge Cases
    /// - Either member without reported experience: neutral 0.5
    pub fn experience_balance(a: &MemberProfile, b: &MemberProfile) -> f64 {
        match (a.experience_years(), b.experience_years()) {
            (Some(exp_a), Some(exp_b)) => {
                let diff = (exp_a - exp_b).abs();
                if diff < 2.0 {
                    0.7
                } else if diff < 5.0 {
                    1.0
                } else {
                    0.6
                }
            }
            _ => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TraitProfile;

    fn member(id: &str) -> MemberProfile {
        MemberProfile::builder(id).build()
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = PERSONALITY_WEIGHT + ROLE_WEIGHT + SKILL_WEIGHT + EXPERIENCE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn role_affinity_is_symmetric_for_all_known_pairs() {
        for &a in Role::KNOWN {
            for &b in Role::KNOWN {
                assert_eq!(
                    CompatibilityModel::role_affinity(a, b),
                    CompatibilityModel::role_affinity(b, a),
                    "asymmetric affinity for {a}/{b}"
                );
            }
        }
    }

    #[test]
    fn role_affinity_defaults_for_unknown_pairs() {
        assert_eq!(
            CompatibilityModel::role_affinity(Role::Unknown, Role::Developer),
            ROLE_AFFINITY_DEFAULT
        );
        assert_eq!(
            CompatibilityModel::role_affinity(Role::Unknown, Role::Unknown),
            ROLE_AFFINITY_DEFAULT
        );
    }

    #[test]
    fn neutral_members_have_known_personality_alignment() {
        // all-neutral traits: cons/agree 1.0 each, extraversion gap 0 -> 0.7,
        // neuroticism 1 - 0.5 = 0.5, openness 0.8
        let a = member("a");
        let b = member("b");
        let expected = (1.0 + 1.0 + 0.7 + 0.5 + 0.8) / 5.0;
        let alignment = CompatibilityModel::personality_alignment(&a, &b);
        assert!((alignment - expected).abs() < 1e-12);
    }

    #[test]
    fn extraversion_moderate_gap_scores_full() {
        let a = member("a");
        let high = MemberProfile::builder("high")
            .traits(TraitProfile::new(0.5, 0.5, 0.8, 0.5, 0.5))
            .build();
        let low = MemberProfile::builder("low")
            .traits(TraitProfile::new(0.5, 0.5, 0.4, 0.5, 0.5))
            .build();
        // gap of 40 on the x100 scale falls in the [20, 50] window
        let with_window = CompatibilityModel::personality_alignment(&high, &low);
        let without_window = CompatibilityModel::personality_alignment(&a, &low);
        assert!(with_window > without_window);
    }

    #[test]
    fn skill_sweet_spot_scores_full_overlap_component() {
        // 2 shared of 5 union = 40% overlap, inside the sweet spot
        let a = MemberProfile::builder("a")
            .skills(["rust", "sql", "docker", "react"])
            .build();
        let b = MemberProfile::builder("b")
            .skills(["rust", "sql", "figma"])
            .build();
        let score = CompatibilityModel::skill_complementarity(&a, &b);
        let unique_ratio = 3.0 / 10.0;
        let expected = 1.0 * 0.6 + unique_ratio * 0.4;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn skill_low_overlap_scores_below_sweet_spot() {
        let a = MemberProfile::builder("a").skills(["rust"]).build();
        let b = MemberProfile::builder("b").skills(["figma"]).build();
        // overlap ratio 0 -> component 0.7, unique ratio 2/4 = 0.5
        let score = CompatibilityModel::skill_complementarity(&a, &b);
        assert!((score - (0.7 * 0.6 + 0.5 * 0.4)).abs() < 1e-12);
    }

    #[test]
    fn skill_high_overlap_is_penalized() {
        let a = MemberProfile::builder("a").skills(["rust", "sql"]).build();
        let b = MemberProfile::builder("b").skills(["rust", "sql"]).build();
        // overlap ratio 1.0 -> component 0.5, unique ratio 0
        let score = CompatibilityModel::skill_complementarity(&a, &b);
        assert!((score - 0.5 * 0.6).abs() < 1e-12);
    }

    #[test]
    fn empty_skill_sets_score_neutral() {
        let a = member("a");
        let b = member("b");
        // overlap ratio 0.5 -> component 1.0, unique ratio 0.5
        let score = CompatibilityModel::skill_complementarity(&a, &b);
        assert!((score - (1.0 * 0.6 + 0.5 * 0.4)).abs() < 1e-12);
    }

    #[test]
    fn experience_bands_follow_policy() {
        let junior = MemberProfile::builder("j").experience_years(1.0).build();
        let peer = MemberProfile::builder("p").experience_years(2.0).build();
        let mid = MemberProfile::builder("m").experience_years(4.0).build();
        let veteran = MemberProfile::builder("v").experience_years(12.0).build();

        assert_eq!(CompatibilityModel::experience_balance(&junior, &peer), 0.7);
        assert_eq!(CompatibilityModel::experience_balance(&junior, &mid), 1.0);
        assert_eq!(CompatibilityModel::experience_balance(&junior, &veteran), 0.6);
    }

    #[test]
    fn missing_experience_scores_neutral() {
        let unreported = member("u");
        let veteran = MemberProfile::builder("v").experience_years(10.0).build();
        assert_eq!(
            CompatibilityModel::experience_balance(&unreported, &veteran),
            0.5
        );
    }

    #[test]
    fn absent_traits_score_identically_to_explicit_neutral() {
        let implicit = member("implicit");
        let explicit = MemberProfile::builder("explicit")
            .traits(TraitProfile::NEUTRAL)
            .build();
        let reference = MemberProfile::builder("ref")
            .role(Role::Developer)
            .traits(TraitProfile::new(0.9, 0.2, 0.6, 0.4, 0.3))
            .skills(["rust", "sql"])
            .experience_years(6.0)
            .build();

        assert_eq!(
            CompatibilityModel::pair_compatibility(&implicit, &reference),
            CompatibilityModel::pair_compatibility(&explicit, &reference)
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_role() -> impl Strategy<Value = Role> {
            prop_oneof![
                Just(Role::Developer),
                Just(Role::Designer),
                Just(Role::ProductManager),
                Just(Role::Qa),
                Just(Role::Devops),
                Just(Role::Unknown),
            ]
        }

        prop_compose! {
            fn arb_member(tag: &'static str)(
                role in arb_role(),
                traits in proptest::option::of(
                    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64)
                ),
                skills in proptest::sample::subsequence(
                    vec!["rust", "python", "react", "figma", "sql", "docker", "jira"],
                    0..=5,
                ),
                experience in proptest::option::of(0.0..=30.0f64),
                availability in 0.0..=1.0f64,
            ) -> MemberProfile {
                let mut builder = MemberProfile::builder(tag)
                    .role(role)
                    .skills(skills)
                    .availability(availability);
                if let Some((o, c, e, a, n)) = traits {
                    builder = builder.traits(crate::domain::foundation::TraitProfile::new(o, c, e, a, n));
                }
                if let Some(years) = experience {
                    builder = builder.experience_years(years);
                }
                builder.build()
            }
        }

        proptest! {
            #[test]
            fn pair_compatibility_is_symmetric(
                a in arb_member("a"),
                b in arb_member("b"),
            ) {
                prop_assert_eq!(
                    CompatibilityModel::pair_compatibility(&a, &b),
                    CompatibilityModel::pair_compatibility(&b, &a)
                );
            }

            #[test]
            fn pair_compatibility_stays_in_unit_interval(
                a in arb_member("a"),
                b in arb_member("b"),
            ) {
                let score = CompatibilityModel::pair_compatibility(&a, &b).value();
                prop_assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}
