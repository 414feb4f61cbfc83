//! Open/closed hand classification from fingertip spread

use crate::detection::config::HandStateThresholds;
use crate::features::mean_fingertip_distance;
use handcue_core::{HandLandmarks, HandState};

/// Fixed-threshold classifier over the mean fingertip-to-palm distance
#[derive(Debug, Clone, Default)]
pub struct HandStateClassifier {
    thresholds: HandStateThresholds,
}

impl HandStateClassifier {
    pub fn new(thresholds: HandStateThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &HandStateThresholds {
        &self.thresholds
    }

    pub fn classify(&self, hand: &HandLandmarks) -> HandState {
        self.classify_distance(mean_fingertip_distance(hand))
    }

    /// Both cut-offs are exclusive: a mean exactly on a threshold is indeterminate.
    pub fn classify_distance(&self, mean_distance: f32) -> HandState {
        if mean_distance > self.thresholds.open_above {
            HandState::Open
        } else if mean_distance < self.thresholds.closed_below {
            HandState::Closed
        } else {
            HandState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handcue_core::hand::{Landmark, FINGERTIPS, LANDMARK_COUNT};

    /// Hand with every fingertip `radius` away from the palm base.
    fn spread_hand(radius: f32) -> HandLandmarks {
        let mut points = [Landmark::new(0.5, 0.6); LANDMARK_COUNT];
        for tip in FINGERTIPS {
            points[tip] = Landmark::new(0.5, 0.6 - radius);
        }
        HandLandmarks::new(points)
    }

    #[test]
    fn test_classify_open_closed_indeterminate() {
        let classifier = HandStateClassifier::default();
        assert_eq!(classifier.classify(&spread_hand(0.30)), HandState::Open);
        assert_eq!(classifier.classify(&spread_hand(0.10)), HandState::Closed);
        assert_eq!(classifier.classify(&spread_hand(0.20)), HandState::Indeterminate);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let classifier = HandStateClassifier::default();
        assert_eq!(classifier.classify_distance(0.25), HandState::Indeterminate);
        assert_eq!(classifier.classify_distance(0.15), HandState::Indeterminate);
        assert_eq!(classifier.classify_distance(0.2501), HandState::Open);
        assert_eq!(classifier.classify_distance(0.1499), HandState::Closed);
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = HandStateClassifier::new(HandStateThresholds {
            open_above: 0.35,
            closed_below: 0.05,
        });
        assert_eq!(classifier.classify(&spread_hand(0.30)), HandState::Indeterminate);
        assert_eq!(classifier.classify(&spread_hand(0.40)), HandState::Open);
    }
}
