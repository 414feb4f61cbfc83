//! Frame pipeline: the single owned state behind gesture detection

use super::arbiter::{ArbiterState, GestureArbiter};
use super::config::GestureConfig;
use crate::classifier::HandStateClassifier;
use crate::swipe::SwipeDetector;
use handcue_core::{GestureEvent, HandLandmarks};
use serde::Serialize;

/// Counters over the frames seen so far
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineStats {
    pub frames: u64,
    pub frames_with_hand: u64,
    pub swipe_events: u64,
    pub hand_state_events: u64,
}

impl PipelineStats {
    pub fn total_events(&self) -> u64 {
        self.swipe_events + self.hand_state_events
    }
}

/// Classifier, swipe detector and arbiter driven one frame at a time
#[derive(Debug, Clone)]
pub struct GesturePipeline {
    config: GestureConfig,
    classifier: HandStateClassifier,
    swipe: SwipeDetector,
    arbiter: GestureArbiter,
    stats: PipelineStats,
}

impl GesturePipeline {
    pub fn new(config: GestureConfig) -> Self {
        let classifier = HandStateClassifier::new(config.hand_state.clone());
        let swipe = SwipeDetector::new(config.swipe.clone(), config.cooldown_secs);
        let arbiter = GestureArbiter::new(config.cooldown_secs);

        Self {
            config,
            classifier,
            swipe,
            arbiter,
            stats: PipelineStats::default(),
        }
    }

    /// Run one frame. `hand` is `None` when no hand is visible; `now` is in
    /// monotonic seconds.
    pub fn process_frame(&mut self, hand: Option<&HandLandmarks>, now: f64) -> Option<GestureEvent> {
        self.stats.frames += 1;

        let Some(hand) = hand else {
            self.arbiter.hand_lost();
            return None;
        };
        self.stats.frames_with_hand += 1;

        let swipe = self
            .swipe
            .observe(hand.index_tip(), now, self.arbiter.last_gesture_at());

        // Hand state only matters when no swipe fired this frame
        let hand_state = match swipe {
            Some(_) => None,
            None => Some(self.classifier.classify(hand)),
        };

        let event = self.arbiter.arbitrate(swipe, hand_state, now)?;
        if event.gesture.is_swipe() {
            self.stats.swipe_events += 1;
        } else {
            self.stats.hand_state_events += 1;
        }
        Some(event)
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    pub fn arbiter_state(&self) -> &ArbiterState {
        self.arbiter.state()
    }

    /// Positions currently held for swipe detection
    pub fn history_len(&self) -> usize {
        self.swipe.history().len()
    }

    /// Forget all per-frame memory; counters are kept.
    pub fn reset(&mut self) {
        self.swipe.reset();
        self.arbiter.reset();
    }
}
