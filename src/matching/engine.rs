use serde::Serialize;

use crate::core::sample::Sample;
use crate::matching::scoring::MatchScore;

/// A reference profile found to be the same person as a query
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// The matched reference
    pub reference: Sample,

    /// Match score details
    pub score: MatchScore,
}

/// Finds the reference profiles that belong to the same person as a query,
/// e.g. an unknown person against a set of suspects or staff
pub struct ProfileMatcher<'a> {
    references: &'a [Sample],
}

impl<'a> ProfileMatcher<'a> {
    pub fn new(references: &'a [Sample]) -> Self {
        Self { references }
    }

    /// Every reference that is the same person as `query`, best first, at
    /// most `limit` of them.
    ///
    /// Results are ranked by ascending effective mismatches, then by
    /// descending number of full locus matches. Ties keep reference order.
    pub fn find_matches(&self, query: &Sample, limit: usize) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = self
            .references
            .iter()
            .filter_map(|reference| {
                let score = MatchScore::calculate(query, reference)?;
                score.is_same_person().then(|| MatchResult {
                    reference: reference.clone(),
                    score,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            a.score
                .effective_mismatches()
                .cmp(&b.score.effective_mismatches())
                .then_with(|| b.score.full.cmp(&a.score.full))
        });

        results.truncate(limit);
        results
    }

    /// Find the single best match
    pub fn find_best_match(&self, query: &Sample) -> Option<MatchResult> {
        self.find_matches(query, 1).into_iter().next()
    }
}
