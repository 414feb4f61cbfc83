//! Handcue gesture detection library
//!
//! Turns a stream of per-frame hand landmarks into debounced gesture events
//! and hands them to a key dispatcher.

pub mod classifier;
pub mod detection;
pub mod dispatch;
pub mod error;
pub mod features;
pub mod overlay;
pub mod source;
pub mod swipe;

// Re-export commonly used types
pub use classifier::HandStateClassifier;
pub use detection::{GestureArbiter, GestureConfig, GesturePipeline, PipelineStats};
pub use dispatch::{Dispatcher, LogKeySink, RecordingKeySink};
pub use error::{ConfigError, FrameError};
pub use features::FingertipDistances;
pub use overlay::{GestureDisplay, OverlayRenderer};
pub use source::{Frame, JsonLinesSource, ScriptStep, ScriptedSource};
pub use swipe::SwipeDetector;

// Error handling
pub type Result<T> = anyhow::Result<T>;

/// Boundaries to the external collaborators
pub mod traits {
    use super::*;
    use handcue_core::KeySignal;

    /// Yields one frame per call; `Ok(None)` ends the stream
    pub trait LandmarkSource {
        fn next_frame(&mut self) -> Result<Option<Frame>>;
    }

    /// Delivers key signals to the focused window
    pub trait KeySink {
        fn send(&mut self, key: KeySignal) -> Result<()>;
    }
}
