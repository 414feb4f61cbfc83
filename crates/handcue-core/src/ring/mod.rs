pub mod history;

pub use history::{PositionHistory, DEFAULT_HISTORY_CAPACITY};
