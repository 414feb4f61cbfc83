//! Per-frame gesture detection

pub mod arbiter;
pub mod config;
pub mod pipeline;

pub use arbiter::{ArbiterState, GestureArbiter};
pub use config::{GestureConfig, HandStateThresholds, SwipeConfig};
pub use pipeline::{GesturePipeline, PipelineStats};
