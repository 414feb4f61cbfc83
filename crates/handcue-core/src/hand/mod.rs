//! Hand data model: landmarks, poses and gestures

pub mod gesture;
pub mod landmark;

pub use gesture::{Gesture, GestureEvent, HandState, SwipeDirection};
pub use landmark::{HandLandmarks, Landmark, FINGERTIPS, LANDMARK_COUNT, PALM_BASE};
