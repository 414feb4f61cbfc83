use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static pose of the hand in a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandState {
    /// Fingers extended away from the palm
    Open,
    /// Fingers curled toward the palm
    Closed,
    /// Between the two thresholds, never produces an event
    Indeterminate,
}

/// Direction of a swipe, in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwipeDirection {
    Left,
    Right,
    /// Decreasing y
    Up,
    /// Increasing y
    Down,
}

/// Discrete gesture produced by the arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gesture {
    Open,
    Closed,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
}

impl Gesture {
    pub const ALL: [Gesture; 6] = [
        Gesture::SwipeLeft,
        Gesture::SwipeRight,
        Gesture::SwipeUp,
        Gesture::SwipeDown,
        Gesture::Open,
        Gesture::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::SwipeLeft => "swipe-left",
            Self::SwipeRight => "swipe-right",
            Self::SwipeUp => "swipe-up",
            Self::SwipeDown => "swipe-down",
        }
    }

    pub fn is_swipe(&self) -> bool {
        self.swipe_direction().is_some()
    }

    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        match self {
            Self::SwipeLeft => Some(SwipeDirection::Left),
            Self::SwipeRight => Some(SwipeDirection::Right),
            Self::SwipeUp => Some(SwipeDirection::Up),
            Self::SwipeDown => Some(SwipeDirection::Down),
            Self::Open | Self::Closed => None,
        }
    }

    /// Hand state gesture for a classification, `None` for indeterminate.
    pub fn from_hand_state(state: HandState) -> Option<Self> {
        match state {
            HandState::Open => Some(Self::Open),
            HandState::Closed => Some(Self::Closed),
            HandState::Indeterminate => None,
        }
    }
}

impl From<SwipeDirection> for Gesture {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Self::SwipeLeft,
            SwipeDirection::Right => Self::SwipeRight,
            SwipeDirection::Up => Self::SwipeUp,
            SwipeDirection::Down => Self::SwipeDown,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gesture {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let gesture = match s.trim().to_lowercase().as_str() {
            "open" | "palm" => Self::Open,
            "closed" | "fist" => Self::Closed,
            "swipe-left" | "left" => Self::SwipeLeft,
            "swipe-right" | "right" => Self::SwipeRight,
            "swipe-up" | "up" => Self::SwipeUp,
            "swipe-down" | "down" => Self::SwipeDown,
            other => bail!("unknown gesture '{}'", other),
        };
        Ok(gesture)
    }
}

/// A gesture together with the time (seconds, monotonic) it was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub gesture: Gesture,
    pub timestamp: f64,
}

impl GestureEvent {
    pub fn new(gesture: Gesture, timestamp: f64) -> Self {
        Self { gesture, timestamp }
    }
}
