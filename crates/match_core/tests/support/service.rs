#![allow(dead_code)]

use match_core::{Location, MatchingConfig, MatchingService, SelectionPolicy};

/// Builder configuration for reproducible test services.
#[derive(Clone, Debug, Default)]
pub struct TestServiceConfig {
    pub matching: MatchingConfig,
    pub roads: Vec<(Location, Location)>,
    pub riders: Vec<(String, String, Location)>,
    pub drivers: Vec<(String, String, Location, f64)>,
}

/// Helper that assembles a `MatchingService` from roads and identities.
#[derive(Debug, Default)]
pub struct TestServiceBuilder {
    config: TestServiceConfig,
}

impl TestServiceBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the driver selection policy.
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.config.matching = self.config.matching.with_selection(selection);
        self
    }

    /// Cap the road distance a driver may be from the rider.
    pub fn with_max_pickup_distance(mut self, limit: f64) -> Self {
        self.config.matching = self.config.matching.with_max_pickup_distance(limit);
        self
    }

    /// Add a road between two points.
    pub fn with_road(mut self, a: (f64, f64), b: (f64, f64)) -> Self {
        self.config.roads.push((a.into(), b.into()));
        self
    }

    /// Add roads connecting consecutive points.
    pub fn with_route(mut self, points: &[(f64, f64)]) -> Self {
        for pair in points.windows(2) {
            self.config.roads.push((pair[0].into(), pair[1].into()));
        }
        self
    }

    pub fn with_rider(mut self, name: &str, id: &str, at: (f64, f64)) -> Self {
        self.config
            .riders
            .push((name.to_string(), id.to_string(), at.into()));
        self
    }

    pub fn with_driver(mut self, name: &str, id: &str, at: (f64, f64), rating: f64) -> Self {
        self.config
            .drivers
            .push((name.to_string(), id.to_string(), at.into(), rating));
        self
    }

    /// Build the service with the configured roads and identities.
    pub fn build(self) -> MatchingService {
        let TestServiceConfig {
            matching,
            roads,
            riders,
            drivers,
        } = self.config;

        let mut service =
            MatchingService::with_config(&matching).expect("test config should be valid");
        for (a, b) in roads {
            service.add_road_edge(a, b);
        }
        for (name, id, location) in riders {
            service
                .register_rider(&name, &id, location)
                .expect("test rider ids should be unique");
        }
        for (name, id, location, rating) in drivers {
            service
                .register_driver(&name, &id, location, rating)
                .expect("test driver ids should be unique");
        }
        service
    }
}
