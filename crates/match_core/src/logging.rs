//! Log output for processes embedding the matcher.
//!
//! The library only emits `tracing` events; installing a subscriber is left to the
//! embedding process, which can use these helpers for plain stdout logging.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

/// Install a stdout subscriber at `level`. Fails if a global subscriber is already set.
pub fn try_init_logging(level: LevelFilter) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(io::stdout)
                .with_target(false)
                .with_filter(level),
        )
        .try_init()
}

/// Like [`try_init_logging`], but keeps an existing subscriber instead of failing.
pub fn init_logging(level: LevelFilter) {
    if try_init_logging(level).is_err() {
        tracing::debug!("global subscriber already installed; keeping it");
    }
}
