//! Register two riders and two drivers, lay out a small road triangle, and match.
//!
//! Run with: cargo run -p match_core --example reference_match

use match_core::logging::init_logging;
use match_core::test_helpers::reference_scenario;
use tracing::level_filters::LevelFilter;

fn main() {
    init_logging(LevelFilter::DEBUG);

    let mut service = reference_scenario();

    println!("Riders matching 'A': {:?}", service.search_rider_by_name("A"));
    println!("Drivers matching 'D': {:?}", service.search_driver_by_name("D"));

    for rider_id in ["R1", "R2"] {
        match service.match_driver(rider_id) {
            Ok(outcome) => println!(
                "Driver {} matched with rider {} at a distance of {:.3}",
                outcome.driver_name, outcome.rider_name, outcome.pickup_distance
            ),
            Err(err) => println!("{rider_id}: {err}"),
        }
    }

    if let Err(err) = service.complete_ride("D1") {
        println!("D1: {err}");
    }
    println!("Available drivers: {}", service.available_driver_count());
}
