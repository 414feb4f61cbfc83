//! Gesture detection configuration

use crate::error::ConfigError;
use crate::Result;
use anyhow::Context;
use handcue_core::ring::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main gesture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub hand_state: HandStateThresholds,
    pub swipe: SwipeConfig,
    /// Minimum gap between any two emitted gestures (seconds)
    pub cooldown_secs: f64,
    /// How long a dispatched command stays on the overlay (seconds)
    pub display_timeout_secs: f64,
    /// Hands scored below this by the landmark model are ignored
    pub min_detection_confidence: f32,
}

/// Mean fingertip-to-palm distance cut-offs, in normalized units.
///
/// Both assume the hand stays at a roughly constant distance from the camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandStateThresholds {
    /// Strictly above this the hand is open
    pub open_above: f32,
    /// Strictly below this the hand is closed
    pub closed_below: f32,
}

/// Swipe detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub history_capacity: usize,
    /// Samples required since the last reset before a swipe can fire
    pub min_samples: usize,
    /// Dominant-axis displacement that must be exceeded
    pub min_distance: f32,
}

impl Default for HandStateThresholds {
    fn default() -> Self {
        Self {
            open_above: 0.25,
            closed_below: 0.15,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            min_samples: 5,
            min_distance: 0.15,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            hand_state: HandStateThresholds::default(),
            swipe: SwipeConfig::default(),
            cooldown_secs: 1.0,
            display_timeout_secs: 1.5,
            min_detection_confidence: 0.7,
        }
    }
}

impl GestureConfig {
    /// Load and validate a JSON configuration file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config: GestureConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config: {:?}", path))?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let thresholds = &self.hand_state;
        if thresholds.open_above <= thresholds.closed_below {
            return Err(ConfigError::InvertedThresholds {
                open_above: thresholds.open_above,
                closed_below: thresholds.closed_below,
            });
        }
        if self.cooldown_secs < 0.0 {
            return Err(ConfigError::NegativeCooldown(self.cooldown_secs));
        }
        if self.display_timeout_secs < 0.0 {
            return Err(ConfigError::NegativeDisplayTimeout(self.display_timeout_secs));
        }
        if self.swipe.min_distance <= 0.0 {
            return Err(ConfigError::NonPositiveSwipeDistance(self.swipe.min_distance));
        }
        if self.swipe.min_samples < 2 || self.swipe.min_samples > self.swipe.history_capacity {
            return Err(ConfigError::SwipeSamples {
                min_samples: self.swipe.min_samples,
                capacity: self.swipe.history_capacity,
            });
        }
        if !(0.0..=1.0).contains(&self.min_detection_confidence) {
            return Err(ConfigError::Confidence(self.min_detection_confidence));
        }
        Ok(())
    }
}
