use super::algorithm::DriverSelector;
use super::types::MatchCandidate;

/// Rating-adjusted selection that trades pickup distance against driver rating.
///
/// Score is `pickup_distance - rating_weight * rating`; the lowest score wins.
/// With a weight of 0 this is the same as nearest-driver selection.
#[derive(Debug, Clone, Copy)]
pub struct RatingAdjustedSelection {
    /// Distance units one rating point is worth.
    pub rating_weight: f64,
}

impl RatingAdjustedSelection {
    pub fn new(rating_weight: f64) -> Self {
        Self { rating_weight }
    }
}

impl Default for RatingAdjustedSelection {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DriverSelector for RatingAdjustedSelection {
    fn score(&self, candidate: &MatchCandidate<'_>) -> f64 {
        candidate.pickup_distance - self.rating_weight * candidate.driver.rating
    }
}
