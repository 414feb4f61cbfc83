//! Hand gesture data model
//!
//! Landmarks, hand states, gesture events, the tracked-point history and the
//! gesture to media-key command table.

pub mod commands;
pub mod hand;
pub mod ring;

pub use commands::{Command, CommandTable, KeySignal};
pub use hand::{Gesture, GestureEvent, HandLandmarks, HandState, Landmark, SwipeDirection};
