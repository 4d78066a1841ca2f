//! Compatibility matrix for a candidate pool.

use crate::domain::foundation::OptimizeError;
use crate::domain::member::MemberProfile;

use super::CompatibilityModel;

/// Square, symmetric pairwise compatibility table, indexed by pool position.
///
/// Built once per run from the upper-triangle pairs and mirrored, then read
/// by every candidate-team evaluation in that run. Stored as a dense flat
/// array for O(1) lookup. Diagonal entries are never read.
#[derive(Debug, Clone)]
pub struct CompatibilityMatrix {
    size: usize,
    entries: Vec<f64>,
}

impl CompatibilityMatrix {
    /// Builds the matrix for a pool.
    ///
    /// # Errors
    /// Returns `InsufficientCandidates` for pools with fewer than 2 members,
    /// since no pair exists.
    pub fn build(pool: &[MemberProfile]) -> Result<Self, OptimizeError> {
        if pool.len() < 2 {
            return Err(OptimizeError::insufficient_candidates(pool.len(), 2));
        }

        let n = pool.len();
        let mut entries = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let score = CompatibilityModel::pair_compatibility(&pool[i], &pool[j]).value();
                entries[i * n + j] = score;
                entries[j * n + i] = score;
            }
        }

        Ok(Self { size: n, entries })
    }

    /// The pool size this matrix was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The compatibility score for the pair at pool positions (i, j).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i * self.size + j]
    }

    /// Mean pairwise compatibility over a subset of pool positions.
    ///
    /// # Edge Cases
    /// - Subsets smaller than 2: returns 1.0 (no pair to disagree)
    pub fn mean_pairwise(&self, subset: &[usize]) -> f64 {
        if subset.len() < 2 {
            return 1.0;
        }

        let mut total = 0.0;
        let mut pairs = 0usize;
        for (pos, &i) in subset.iter().enumerate() {
            for &j in &subset[pos + 1..] {
                total += self.get(i, j);
                pairs += 1;
            }
        }

        total / pairs as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;

    fn pool(count: usize) -> Vec<MemberProfile> {
        (0..count)
            .map(|i| {
                MemberProfile::builder(format!("m-{i}"))
                    .role(Role::KNOWN[i % Role::KNOWN.len()])
                    .experience_years(i as f64)
                    .build()
            })
            .collect()
    }

    #[test]
    fn build_rejects_pools_without_pairs() {
        let result = CompatibilityMatrix::build(&pool(1));
        assert_eq!(
            result.unwrap_err(),
            OptimizeError::InsufficientCandidates { actual: 1, required: 2 }
        );
    }

    #[test]
    fn build_produces_symmetric_unit_entries() {
        let matrix = CompatibilityMatrix::build(&pool(5)).unwrap();
        for i in 0..5 {
            for j in 0..5 {
                if i == j {
                    continue;
                }
                let entry = matrix.get(i, j);
                assert_eq!(entry, matrix.get(j, i));
                assert!((0.0..=1.0).contains(&entry));
            }
        }
    }

    #[test]
    fn mean_pairwise_averages_all_pairs() {
        let matrix = CompatibilityMatrix::build(&pool(4)).unwrap();
        let subset = [0, 1, 2];
        let expected =
            (matrix.get(0, 1) + matrix.get(0, 2) + matrix.get(1, 2)) / 3.0;
        assert!((matrix.mean_pairwise(&subset) - expected).abs() < 1e-12);
    }

    #[test]
    fn mean_pairwise_of_singleton_is_one() {
        let matrix = CompatibilityMatrix::build(&pool(3)).unwrap();
        assert_eq!(matrix.mean_pairwise(&[2]), 1.0);
    }
}
