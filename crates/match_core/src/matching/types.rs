use crate::agents::Driver;

/// An eligible driver paired with its road distance to the rider.
#[derive(Debug, Clone, Copy)]
pub struct MatchCandidate<'a> {
    pub driver: &'a Driver,
    pub pickup_distance: f64,
}

/// Represents a successful match result.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub driver_id: String,
    pub driver_name: String,
    pub rider_id: String,
    pub rider_name: String,
    /// Road-network distance from the driver to the rider.
    pub pickup_distance: f64,
}
