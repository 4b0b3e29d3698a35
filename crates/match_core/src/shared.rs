//! Thread-safe handle to a [`MatchingService`].
//!
//! Every operation takes the same lock, so a match (candidate scan plus claim) is
//! atomic with respect to every other call: two concurrent matches can never
//! claim the same driver.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::MatchingConfig;
use crate::error::{ConfigError, MatchError};
use crate::location::Location;
use crate::matching::{DriverSelector, MatchOutcome};
use crate::service::MatchingService;

#[derive(Debug, Clone, Default)]
pub struct SharedMatchingService {
    inner: Arc<Mutex<MatchingService>>,
}

impl SharedMatchingService {
    pub fn new(service: MatchingService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    pub fn with_config(config: &MatchingConfig) -> Result<Self, ConfigError> {
        MatchingService::with_config(config).map(Self::new)
    }

    // A panic mid-operation cannot leave the pool half-updated (claim and release
    // are single steps), so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, MatchingService> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register_rider(&self, name: &str, id: &str, location: Location) -> Result<(), MatchError> {
        self.lock().register_rider(name, id, location)
    }

    pub fn register_driver(
        &self,
        name: &str,
        id: &str,
        location: Location,
        rating: f64,
    ) -> Result<(), MatchError> {
        self.lock().register_driver(name, id, location, rating)
    }

    pub fn search_rider_by_name(&self, prefix: &str) -> Vec<String> {
        self.lock().search_rider_by_name(prefix)
    }

    pub fn search_driver_by_name(&self, prefix: &str) -> Vec<String> {
        self.lock().search_driver_by_name(prefix)
    }

    pub fn match_driver(&self, rider_id: &str) -> Result<MatchOutcome, MatchError> {
        self.lock().match_driver(rider_id)
    }

    pub fn complete_ride(&self, driver_id: &str) -> Result<(), MatchError> {
        self.lock().complete_ride(driver_id)
    }

    pub fn add_road_edge(&self, a: Location, b: Location) -> bool {
        self.lock().add_road_edge(a, b)
    }

    pub fn shortest_distance(&self, src: &Location, dest: &Location) -> Option<f64> {
        self.lock().road_network().shortest_distance(src, dest)
    }

    pub fn set_selector(&self, selector: Box<dyn DriverSelector>) {
        self.lock().set_selector(selector);
    }

    pub fn available_driver_count(&self) -> usize {
        self.lock().available_driver_count()
    }

    /// Run `f` with exclusive access, for multi-step operations that must not interleave.
    pub fn with_service<T>(&self, f: impl FnOnce(&mut MatchingService) -> T) -> T {
        f(&mut *self.lock())
    }
}
