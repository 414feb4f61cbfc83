pub mod table;

pub use table::{Command, CommandTable, KeySignal};
