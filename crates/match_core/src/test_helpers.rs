//! Test helpers for common test setup and utilities.
//!
//! Shared fixtures for unit tests, integration tests, and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::location::Location;
use crate::road_network::RoadNetwork;
use crate::service::MatchingService;

/// Rider `R1` position in the reference scenario.
pub const RIDER_LOCATION: Location = Location::new(1.0, 1.0);
/// Driver `D1` position: one direct road edge from the rider.
pub const NEAR_DRIVER_LOCATION: Location = Location::new(1.5, 1.5);
/// Driver `D2` position: not on any road.
pub const DISCONNECTED_DRIVER_LOCATION: Location = Location::new(5.0, 5.0);
/// Rider `R2` position.
pub const SECOND_RIDER_LOCATION: Location = Location::new(2.0, 2.0);

/// The reference scenario: riders Alice (`R1`) and Bob (`R2`), drivers Charlie
/// (`D1`, reachable) and David (`D2`, disconnected), and a three-edge road triangle.
pub fn reference_scenario() -> MatchingService {
    let mut service = MatchingService::new();
    populate_reference_scenario(&mut service);
    service
}

/// Register the reference scenario's identities and roads on an existing service.
///
/// # Panics
///
/// Panics if any of the ids are already registered.
pub fn populate_reference_scenario(service: &mut MatchingService) {
    service
        .register_rider("Alice", "R1", RIDER_LOCATION)
        .expect("R1 should be unregistered");
    service
        .register_rider("Bob", "R2", SECOND_RIDER_LOCATION)
        .expect("R2 should be unregistered");
    service
        .register_driver("Charlie", "D1", NEAR_DRIVER_LOCATION, 4.5)
        .expect("D1 should be unregistered");
    service
        .register_driver("David", "D2", DISCONNECTED_DRIVER_LOCATION, 4.0)
        .expect("D2 should be unregistered");

    service.add_road_edge(RIDER_LOCATION, SECOND_RIDER_LOCATION);
    service.add_road_edge(RIDER_LOCATION, NEAR_DRIVER_LOCATION);
    service.add_road_edge(SECOND_RIDER_LOCATION, NEAR_DRIVER_LOCATION);
}

/// Location of grid intersection `(col, row)` with unit spacing.
pub fn grid_location(col: usize, row: usize) -> Location {
    Location::new(col as f64, row as f64)
}

/// A `width` x `height` street grid with unit spacing.
///
/// Each street segment is kept with probability `1 - drop_probability`; a seeded
/// RNG keeps the layout reproducible.
pub fn random_grid_network(width: usize, height: usize, drop_probability: f64, seed: u64) -> RoadNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = RoadNetwork::new();
    for row in 0..height {
        for col in 0..width {
            if col + 1 < width && !rng.gen_bool(drop_probability) {
                network.add_edge(grid_location(col, row), grid_location(col + 1, row));
            }
            if row + 1 < height && !rng.gen_bool(drop_probability) {
                network.add_edge(grid_location(col, row), grid_location(col, row + 1));
            }
        }
    }
    network
}

/// A service over a full `size` x `size` grid with `drivers` drivers scattered on
/// intersections and one rider `R1` at the grid centre.
pub fn grid_service(size: usize, drivers: usize, seed: u64) -> MatchingService {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut service = MatchingService::new();
    *service.road_network_mut() = random_grid_network(size, size, 0.0, seed);
    service
        .register_rider("Rider", "R1", grid_location(size / 2, size / 2))
        .expect("R1 should be unregistered");
    for i in 0..drivers {
        let location = grid_location(rng.gen_range(0..size), rng.gen_range(0..size));
        service
            .register_driver(&format!("Driver {i}"), &format!("D{i:05}"), location, rng.gen_range(3.0..5.0))
            .expect("generated driver ids are unique");
    }
    service
}
