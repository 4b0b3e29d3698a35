//! Driver registry and the set of drivers currently eligible for matching.
//!
//! The pool owns every registered [`Driver`]. A driver id is in the eligible set
//! exactly when that driver's availability flag is set; [`DriverPool::claim`] and
//! [`DriverPool::release`] are the only transitions and update both together.

use std::collections::{BTreeSet, HashMap};

use crate::agents::Driver;

#[derive(Debug, Default)]
pub struct DriverPool {
    drivers: HashMap<String, Driver>,
    /// Ordered so that scans visit drivers by ascending id.
    eligible: BTreeSet<String>,
}

impl DriverPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `driver` as available. Returns the driver back if its id is taken.
    pub fn register(&mut self, mut driver: Driver) -> Result<(), Driver> {
        if self.drivers.contains_key(&driver.id) {
            return Err(driver);
        }
        driver.available = true;
        self.eligible.insert(driver.id.clone());
        self.drivers.insert(driver.id.clone(), driver);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Driver> {
        self.drivers.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.drivers.contains_key(id)
    }

    pub fn is_eligible(&self, id: &str) -> bool {
        self.eligible.contains(id)
    }

    /// Total registered drivers, available or not.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.eligible.len()
    }

    /// Eligible drivers in ascending id order.
    pub fn available(&self) -> impl Iterator<Item = &Driver> + '_ {
        self.eligible.iter().filter_map(|id| self.drivers.get(id))
    }

    /// Take an eligible driver out of the pool and mark it unavailable.
    ///
    /// Returns `None` if the driver is unknown or already claimed.
    pub fn claim(&mut self, id: &str) -> Option<&Driver> {
        if !self.eligible.remove(id) {
            return None;
        }
        let driver = self.drivers.get_mut(id)?;
        driver.available = false;
        Some(driver)
    }

    /// Return a driver to the pool. Releasing an eligible driver changes nothing.
    ///
    /// Returns `None` if the driver is unknown.
    pub fn release(&mut self, id: &str) -> Option<&Driver> {
        let driver = self.drivers.get_mut(id)?;
        driver.available = true;
        if !self.eligible.contains(id) {
            self.eligible.insert(driver.id.clone());
        }
        Some(driver)
    }
}
