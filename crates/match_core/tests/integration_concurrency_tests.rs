use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

use match_core::test_helpers::populate_reference_scenario;
use match_core::{Location, MatchError, MatchingConfig, SharedMatchingService};

#[test]
fn concurrent_matches_never_share_a_driver() {
    let shared =
        SharedMatchingService::with_config(&MatchingConfig::default()).expect("valid config");
    shared.add_road_edge(Location::new(0.0, 0.0), Location::new(1.0, 0.0));
    shared
        .register_driver("Only", "D1", Location::new(1.0, 0.0), 4.0)
        .expect("driver");
    const RIDERS: usize = 16;
    for i in 0..RIDERS {
        shared
            .register_rider(&format!("Rider {i}"), &format!("R{i}"), Location::new(0.0, 0.0))
            .expect("rider");
    }

    let barrier = Barrier::new(RIDERS);
    let successes = AtomicUsize::new(0);
    thread::scope(|scope| {
        for i in 0..RIDERS {
            let shared = shared.clone();
            let barrier = &barrier;
            let successes = &successes;
            scope.spawn(move || {
                barrier.wait();
                match shared.match_driver(&format!("R{i}")) {
                    Ok(outcome) => {
                        assert_eq!(outcome.driver_id, "D1");
                        successes.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(err) => assert_eq!(err, MatchError::NoDriversAvailable),
                }
            });
        }
    });

    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert_eq!(shared.available_driver_count(), 0);
}

#[test]
fn concurrent_completions_keep_pool_a_set() {
    let shared = SharedMatchingService::default();
    shared.with_service(populate_reference_scenario);
    shared.match_driver("R1").expect("D1 matched");

    thread::scope(|scope| {
        for _ in 0..8 {
            let shared = shared.clone();
            scope.spawn(move || shared.complete_ride("D1").expect("known driver"));
        }
    });

    // D1 and the unreachable D2.
    assert_eq!(shared.available_driver_count(), 2);
    assert_eq!(shared.match_driver("R1").expect("match").driver_id, "D1");
    assert_eq!(shared.match_driver("R1"), Err(MatchError::NoDriversAvailable));
}

#[test]
fn shared_handle_exposes_searches_and_distances() {
    let shared = SharedMatchingService::default();
    shared.with_service(populate_reference_scenario);
    assert_eq!(shared.search_rider_by_name("B"), vec!["Bob"]);
    assert_eq!(shared.search_driver_by_name("Ch"), vec!["Charlie"]);
    assert_eq!(
        shared.shortest_distance(&Location::new(1.0, 1.0), &Location::new(5.0, 5.0)),
        None
    );
}
