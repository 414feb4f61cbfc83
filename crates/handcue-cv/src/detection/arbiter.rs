//! Per-frame arbitration between swipes and hand-state changes

use handcue_core::{Gesture, GestureEvent, HandState, SwipeDirection};
use serde::Serialize;
use tracing::debug;

/// Memory carried from one frame to the next
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArbiterState {
    /// Time of the last emitted gesture of any kind
    pub last_gesture_at: Option<f64>,
    /// Hand state of the last hand-state gesture, cleared when the hand leaves
    pub last_hand_state: Option<HandState>,
}

/// Picks at most one gesture per frame and enforces the shared cooldown
#[derive(Debug, Clone)]
pub struct GestureArbiter {
    cooldown_secs: f64,
    state: ArbiterState,
}

impl GestureArbiter {
    pub fn new(cooldown_secs: f64) -> Self {
        Self {
            cooldown_secs,
            state: ArbiterState::default(),
        }
    }

    pub fn state(&self) -> &ArbiterState {
        &self.state
    }

    pub fn last_gesture_at(&self) -> Option<f64> {
        self.state.last_gesture_at
    }

    /// Seconds since the last gesture, `None` if nothing was emitted yet.
    fn elapsed(&self, now: f64) -> Option<f64> {
        self.state.last_gesture_at.map(|last| now - last)
    }

    /// Combine this frame's signals. A swipe wins over the hand state.
    ///
    /// Swipes are accepted once a full cooldown has passed; hand-state
    /// gestures need strictly more than the cooldown, a determinate state,
    /// and a state different from the last one emitted.
    pub fn arbitrate(
        &mut self,
        swipe: Option<SwipeDirection>,
        hand_state: Option<HandState>,
        now: f64,
    ) -> Option<GestureEvent> {
        if let Some(direction) = swipe {
            if self.elapsed(now).is_some_and(|e| e < self.cooldown_secs) {
                debug!("Swipe {:?} suppressed by cooldown", direction);
                return None;
            }
            return Some(self.emit(Gesture::from(direction), now));
        }

        let state = hand_state?;
        let gesture = Gesture::from_hand_state(state)?;
        if self.state.last_hand_state == Some(state) {
            return None;
        }
        if self.elapsed(now).is_some_and(|e| e <= self.cooldown_secs) {
            return None;
        }

        self.state.last_hand_state = Some(state);
        Some(self.emit(gesture, now))
    }

    fn emit(&mut self, gesture: Gesture, now: f64) -> GestureEvent {
        self.state.last_gesture_at = Some(now);
        debug!("Gesture emitted: {} at {:.3}s", gesture, now);
        GestureEvent::new(gesture, now)
    }

    /// No hand in this frame: the next visible state counts as a change.
    pub fn hand_lost(&mut self) {
        self.state.last_hand_state = None;
    }

    pub fn reset(&mut self) {
        self.state = ArbiterState::default();
    }
}
