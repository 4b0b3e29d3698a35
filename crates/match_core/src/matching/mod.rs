pub mod algorithm;
pub mod nearest;
pub mod rating_adjusted;
pub mod types;

pub use algorithm::DriverSelector;
pub use nearest::NearestDriverSelection;
pub use rating_adjusted::RatingAdjustedSelection;
pub use types::{MatchCandidate, MatchOutcome};

use crate::config::SelectionPolicy;

/// Construct a boxed [`DriverSelector`] from a [`SelectionPolicy`] descriptor.
pub fn build_selector(policy: &SelectionPolicy) -> Box<dyn DriverSelector> {
    match policy {
        SelectionPolicy::Nearest => Box::new(NearestDriverSelection),
        SelectionPolicy::RatingAdjusted { rating_weight } => {
            Box::new(RatingAdjustedSelection::new(*rating_weight))
        }
    }
}
