//! Geometric features of a single hand

use handcue_core::hand::landmark::{INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP};
use handcue_core::HandLandmarks;
use serde::Serialize;

/// Distance from each fingertip to the palm base, in normalized units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FingertipDistances {
    pub thumb: f32,
    pub index: f32,
    pub middle: f32,
    pub ring: f32,
    pub pinky: f32,
}

impl FingertipDistances {
    pub fn measure(hand: &HandLandmarks) -> Self {
        let palm = hand.palm_base();
        let to_palm = |tip: usize| hand.get(tip).distance(&palm);
        Self {
            thumb: to_palm(THUMB_TIP),
            index: to_palm(INDEX_TIP),
            middle: to_palm(MIDDLE_TIP),
            ring: to_palm(RING_TIP),
            pinky: to_palm(PINKY_TIP),
        }
    }

    pub fn as_array(&self) -> [f32; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    /// Arithmetic mean of the five distances
    pub fn mean(&self) -> f32 {
        self.as_array().iter().sum::<f32>() / 5.0
    }
}

pub fn mean_fingertip_distance(hand: &HandLandmarks) -> f32 {
    FingertipDistances::measure(hand).mean()
}
