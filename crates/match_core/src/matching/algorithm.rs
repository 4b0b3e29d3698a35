use std::fmt::Debug;

use super::types::MatchCandidate;

/// Trait for the comparator that picks a driver among reachable candidates.
///
/// Selection criteria may change between calls, so nothing is pre-sorted: every
/// match scans the candidates and keeps the lowest score.
pub trait DriverSelector: Debug + Send + Sync {
    /// Score a candidate. Lower is better.
    fn score(&self, candidate: &MatchCandidate<'_>) -> f64;

    /// Pick the best candidate, or `None` if there are none.
    ///
    /// Equal scores fall back to the lowest driver id, so the outcome does not
    /// depend on candidate order.
    fn select<'a>(&self, candidates: &[MatchCandidate<'a>]) -> Option<MatchCandidate<'a>> {
        candidates.iter().copied().min_by(|a, b| {
            self.score(a)
                .total_cmp(&self.score(b))
                .then_with(|| a.driver.id.cmp(&b.driver.id))
        })
    }
}

