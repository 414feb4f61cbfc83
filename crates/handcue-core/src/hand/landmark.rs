//! Hand landmark snapshot as delivered by the landmark model.
//!
//! Coordinates are normalized to the camera frame: `x` grows to the right of
//! the picture the user sees (the frame is assumed to be mirrored, selfie
//! style), `y` grows downward. A swipe "up" therefore means decreasing `y`.

use serde::{Deserialize, Serialize};

/// Number of landmarks reported per hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Palm base, the reference point for fingertip distances.
pub const PALM_BASE: usize = WRIST;

/// Fingertips in thumb, index, middle, ring, pinky order.
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// A single normalized landmark point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in normalized space
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// All 21 landmarks of one hand for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    pub points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build from an arbitrary list, `None` unless exactly 21 points are given.
    pub fn from_slice(points: &[Landmark]) -> Option<Self> {
        let points: [Landmark; LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self { points })
    }

    pub fn get(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn palm_base(&self) -> Landmark {
        self.points[PALM_BASE]
    }

    /// Tracked point for swipes
    pub fn index_tip(&self) -> Landmark {
        self.points[INDEX_TIP]
    }

    /// Flip horizontally, for sources that deliver the raw (unmirrored) camera view.
    pub fn mirrored(&self) -> Self {
        let mut points = self.points;
        for point in points.iter_mut() {
            point.x = 1.0 - point.x;
        }
        Self { points }
    }

    /// Move every point by the same offset.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let mut points = self.points;
        for point in points.iter_mut() {
            point.x += dx;
            point.y += dy;
        }
        Self { points }
    }
}
