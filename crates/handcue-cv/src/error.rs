//! Typed errors for the source and configuration boundaries

use thiserror::Error;

/// A landmark frame that could not be turned into a hand.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("expected 21 landmarks, got {0}")]
    LandmarkCount(usize),

    #[error("malformed frame on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected gesture configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("open threshold ({open_above}) must be greater than closed threshold ({closed_below})")]
    InvertedThresholds { open_above: f32, closed_below: f32 },

    #[error("cooldown must be non-negative, got {0}")]
    NegativeCooldown(f64),

    #[error("display timeout must be non-negative, got {0}")]
    NegativeDisplayTimeout(f64),

    #[error("swipe distance must be positive, got {0}")]
    NonPositiveSwipeDistance(f32),

    #[error("swipe needs between 2 and {capacity} samples, got {min_samples}")]
    SwipeSamples { min_samples: usize, capacity: usize },

    #[error("detection confidence must be within [0, 1], got {0}")]
    Confidence(f32),
}
