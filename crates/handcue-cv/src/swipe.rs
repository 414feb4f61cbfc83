//! Swipe detection from the recent trajectory of the index fingertip
//!
//! Direction signs follow image coordinates of the mirrored camera frame:
//! decreasing `y` is `Up`, increasing `x` is `Right`.

use crate::detection::config::SwipeConfig;
use handcue_core::ring::PositionHistory;
use handcue_core::{Landmark, SwipeDirection};
use tracing::debug;

/// Turns a short trajectory into at most one swipe per call
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    config: SwipeConfig,
    cooldown_secs: f64,
    history: PositionHistory,
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig, cooldown_secs: f64) -> Self {
        let history = PositionHistory::with_capacity(config.history_capacity);
        Self {
            config,
            cooldown_secs,
            history,
        }
    }

    /// Record `position` and report a swipe if the trajectory qualifies.
    ///
    /// `last_gesture_at` is the time of the last gesture of any kind; no swipe
    /// is reported less than the cooldown after it. The sample is recorded
    /// either way. A reported swipe clears the history.
    pub fn observe(
        &mut self,
        position: Landmark,
        now: f64,
        last_gesture_at: Option<f64>,
    ) -> Option<SwipeDirection> {
        self.history.push(position);

        if self.history.len() < self.config.min_samples {
            return None;
        }

        if let Some(last) = last_gesture_at {
            if now - last < self.cooldown_secs {
                return None;
            }
        }

        let (dx, dy) = self.history.displacement()?;
        let direction = self.classify_displacement(dx, dy)?;

        self.history.clear();
        debug!("Swipe detected: {:?} (dx={:.3}, dy={:.3})", direction, dx, dy);
        Some(direction)
    }

    /// Dominant-axis direction of a displacement, if it is long enough.
    pub fn classify_displacement(&self, dx: f32, dy: f32) -> Option<SwipeDirection> {
        if dx.abs() > dy.abs() {
            if dx.abs() <= self.config.min_distance {
                return None;
            }
            Some(if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            })
        } else {
            if dy.abs() <= self.config.min_distance {
                return None;
            }
            Some(if dy < 0.0 {
                SwipeDirection::Up
            } else {
                SwipeDirection::Down
            })
        }
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}
