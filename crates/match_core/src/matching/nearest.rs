use super::algorithm::DriverSelector;
use super::types::MatchCandidate;

/// Nearest-driver selection: the shortest road distance wins.
///
/// This is the default policy. Rating plays no part.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestDriverSelection;

impl DriverSelector for NearestDriverSelection {
    fn score(&self, candidate: &MatchCandidate<'_>) -> f64 {
        candidate.pickup_distance
    }
}
