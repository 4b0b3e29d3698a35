//! The matching service: registration, name search, matching, and ride completion.
//!
//! A match runs in four steps:
//!
//! 1. Look up the rider (`RiderNotFound` if missing).
//! 2. Compute the road distance from every eligible driver to the rider; drivers
//!    that cannot reach the rider, or are beyond `max_pickup_distance`, are skipped.
//! 3. Let the configured [`DriverSelector`] pick the best remaining candidate.
//! 4. Claim the winner from the pool, which marks it unavailable and removes it
//!    from the eligible set in one step.
//!
//! `MatchingService` takes `&mut self` for every mutation. Use
//! [`crate::shared::SharedMatchingService`] to share one instance across threads.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::agents::{Driver, Rider};
use crate::config::{validate_pickup_limit, MatchingConfig};
use crate::error::{ConfigError, IdentityKind, MatchError};
use crate::location::Location;
use crate::matching::{
    build_selector, DriverSelector, MatchCandidate, MatchOutcome, NearestDriverSelection,
};
use crate::pool::DriverPool;
use crate::prefix_index::PrefixIndex;
use crate::road_network::RoadNetwork;

#[derive(Debug)]
pub struct MatchingService {
    riders: HashMap<String, Rider>,
    drivers: DriverPool,
    rider_names: PrefixIndex,
    driver_names: PrefixIndex,
    road_network: RoadNetwork,
    selector: Box<dyn DriverSelector>,
    max_pickup_distance: Option<f64>,
}

impl Default for MatchingService {
    fn default() -> Self {
        Self {
            riders: HashMap::new(),
            drivers: DriverPool::new(),
            rider_names: PrefixIndex::new(),
            driver_names: PrefixIndex::new(),
            road_network: RoadNetwork::new(),
            selector: Box::new(NearestDriverSelection),
            max_pickup_distance: None,
        }
    }
}

impl MatchingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service with the configured selection policy and pickup limit.
    ///
    /// Fails if `config` does not pass [`MatchingConfig::validate`].
    pub fn with_config(config: &MatchingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            selector: build_selector(&config.selection),
            max_pickup_distance: config.max_pickup_distance,
            ..Self::default()
        })
    }

    /// Replace the selection criteria for subsequent matches.
    pub fn set_selector(&mut self, selector: Box<dyn DriverSelector>) {
        self.selector = selector;
    }

    /// Change the pickup limit. A NaN or negative limit is rejected and the old one kept.
    pub fn set_max_pickup_distance(
        &mut self,
        max_pickup_distance: Option<f64>,
    ) -> Result<(), ConfigError> {
        validate_pickup_limit(max_pickup_distance)?;
        self.max_pickup_distance = max_pickup_distance;
        Ok(())
    }

    pub fn register_rider(
        &mut self,
        name: &str,
        id: &str,
        location: Location,
    ) -> Result<(), MatchError> {
        if self.riders.contains_key(id) {
            warn!(rider_id = id, "rejected rider registration: duplicate id");
            return Err(MatchError::DuplicateId {
                kind: IdentityKind::Rider,
                id: id.to_string(),
            });
        }
        self.riders
            .insert(id.to_string(), Rider::new(name, id, location));
        self.rider_names.insert(name);
        info!(rider_id = id, name, "rider registered");
        Ok(())
    }

    pub fn register_driver(
        &mut self,
        name: &str,
        id: &str,
        location: Location,
        rating: f64,
    ) -> Result<(), MatchError> {
        if self
            .drivers
            .register(Driver::new(name, id, location, rating))
            .is_err()
        {
            warn!(driver_id = id, "rejected driver registration: duplicate id");
            return Err(MatchError::DuplicateId {
                kind: IdentityKind::Driver,
                id: id.to_string(),
            });
        }
        self.driver_names.insert(name);
        info!(driver_id = id, name, rating, "driver registered");
        Ok(())
    }

    /// Names of registered riders starting with `prefix`, in lexicographic order.
    pub fn search_rider_by_name(&self, prefix: &str) -> Vec<String> {
        self.rider_names.autocomplete(prefix)
    }

    /// Names of registered drivers starting with `prefix`, in lexicographic order.
    pub fn search_driver_by_name(&self, prefix: &str) -> Vec<String> {
        self.driver_names.autocomplete(prefix)
    }

    /// Match the rider with the best reachable available driver and claim that driver.
    pub fn match_driver(&mut self, rider_id: &str) -> Result<MatchOutcome, MatchError> {
        let rider = self
            .riders
            .get(rider_id)
            .ok_or_else(|| MatchError::RiderNotFound(rider_id.to_string()))?;
        if self.drivers.available_count() == 0 {
            debug!(rider_id, "no drivers in pool");
            return Err(MatchError::NoDriversAvailable);
        }

        let candidates: Vec<MatchCandidate<'_>> = self
            .drivers
            .available()
            .filter_map(|driver| {
                let Some(pickup_distance) = self
                    .road_network
                    .shortest_distance(&driver.location, &rider.location)
                else {
                    debug!(rider_id, driver_id = %driver.id, "driver cannot reach rider");
                    return None;
                };
                if self
                    .max_pickup_distance
                    .is_some_and(|limit| pickup_distance > limit)
                {
                    debug!(rider_id, driver_id = %driver.id, pickup_distance, "driver beyond pickup limit");
                    return None;
                }
                Some(MatchCandidate {
                    driver,
                    pickup_distance,
                })
            })
            .collect();

        let (driver_id, pickup_distance) = match self.selector.select(&candidates) {
            Some(best) => (best.driver.id.clone(), best.pickup_distance),
            None => {
                debug!(
                    rider_id,
                    eligible = self.drivers.available_count(),
                    "no reachable driver"
                );
                return Err(MatchError::NoDriversAvailable);
            }
        };
        let rider_name = rider.name.clone();

        let driver = self
            .drivers
            .claim(&driver_id)
            .ok_or_else(|| MatchError::DriverNotFound(driver_id.clone()))?;
        info!(
            rider_id,
            driver_id = %driver.id,
            pickup_distance,
            "driver matched"
        );
        Ok(MatchOutcome {
            driver_id: driver.id.clone(),
            driver_name: driver.name.clone(),
            rider_id: rider_id.to_string(),
            rider_name,
            pickup_distance,
        })
    }

    /// Return a driver to the pool. Completing a ride for an available driver is a no-op.
    pub fn complete_ride(&mut self, driver_id: &str) -> Result<(), MatchError> {
        let driver = self
            .drivers
            .release(driver_id)
            .ok_or_else(|| MatchError::DriverNotFound(driver_id.to_string()))?;
        info!(driver_id = %driver.id, "ride completed; driver available");
        Ok(())
    }

    /// Connect two locations in the road network. Returns `false` for a repeated edge.
    pub fn add_road_edge(&mut self, a: Location, b: Location) -> bool {
        self.road_network.add_edge(a, b)
    }

    pub fn rider(&self, id: &str) -> Option<&Rider> {
        self.riders.get(id)
    }

    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.get(id)
    }

    pub fn available_driver_count(&self) -> usize {
        self.drivers.available_count()
    }

    pub fn road_network(&self) -> &RoadNetwork {
        &self.road_network
    }

    pub fn road_network_mut(&mut self) -> &mut RoadNetwork {
        &mut self.road_network
    }
}
