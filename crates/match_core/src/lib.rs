//! Ride matching over a weighted road network.
//!
//! [`service::MatchingService`] registers riders and drivers, answers name-prefix
//! searches, and matches each rider with the available driver that has the best
//! score (by default: shortest road distance). [`shared::SharedMatchingService`]
//! wraps it for use across threads.

pub mod agents;
pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod matching;
pub mod pool;
pub mod prefix_index;
pub mod road_network;
pub mod service;
pub mod shared;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use agents::{Driver, Identity, Rider};
pub use config::{MatchingConfig, SelectionPolicy};
pub use error::{ConfigError, IdentityKind, MatchError};
pub use location::Location;
pub use matching::MatchOutcome;
pub use road_network::RoadNetwork;
pub use service::MatchingService;
pub use shared::SharedMatchingService;
