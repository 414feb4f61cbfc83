//! Landmark sources feeding the pipeline

pub mod jsonl;
pub mod scripted;

pub use jsonl::JsonLinesSource;
pub use scripted::{ScriptStep, ScriptedSource};

use handcue_core::HandLandmarks;

/// One camera frame as seen by the core
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Capture time in seconds, when the source knows it
    pub timestamp: Option<f64>,
    /// The tracked hand, `None` when no hand is visible
    pub hand: Option<HandLandmarks>,
}

impl Frame {
    pub fn new(timestamp: Option<f64>, hand: Option<HandLandmarks>) -> Self {
        Self { timestamp, hand }
    }

    pub fn empty(timestamp: Option<f64>) -> Self {
        Self::new(timestamp, None)
    }
}
