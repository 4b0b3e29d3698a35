//! Matching configuration: selection policy and pickup limits.
//!
//! Serializes to and from JSON so deployments can ship a config file, e.g.
//!
//! ```json
//! { "selection": { "kind": "rating_adjusted", "rating_weight": 0.5 }, "max_pickup_distance": 10.0 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which comparator picks the driver among reachable candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Minimum road distance.
    #[default]
    Nearest,
    /// Road distance minus `rating_weight` times the driver's rating.
    RatingAdjusted { rating_weight: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub selection: SelectionPolicy,
    /// Candidates farther than this road distance are never matched. `None` = unlimited.
    pub max_pickup_distance: Option<f64>,
}

impl MatchingConfig {
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_max_pickup_distance(mut self, max_pickup_distance: f64) -> Self {
        self.max_pickup_distance = Some(max_pickup_distance);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Weights and limits must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let SelectionPolicy::RatingAdjusted { rating_weight } = self.selection {
            if !rating_weight.is_finite() || rating_weight < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "rating_weight must be finite and non-negative, got {rating_weight}"
                )));
            }
        }
        validate_pickup_limit(self.max_pickup_distance)
    }
}

/// A pickup limit must be a non-negative number; infinity means unlimited.
pub fn validate_pickup_limit(limit: Option<f64>) -> Result<(), ConfigError> {
    match limit {
        Some(limit) if limit.is_nan() || limit < 0.0 => Err(ConfigError::Invalid(format!(
            "max_pickup_distance must be non-negative, got {limit}"
        ))),
        _ => Ok(()),
    }
}
