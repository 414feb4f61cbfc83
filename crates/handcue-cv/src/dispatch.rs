//! Gesture to key command dispatch

use crate::traits::KeySink;
use crate::Result;
use anyhow::Context;
use handcue_core::{Command, CommandTable, GestureEvent, KeySignal};
use tracing::info;

/// Looks up the command for a gesture and hands its key to a sink
pub struct Dispatcher<S: KeySink> {
    table: CommandTable,
    sink: S,
    dispatched: u64,
}

impl<S: KeySink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self::with_table(CommandTable::standard(), sink)
    }

    pub fn with_table(table: CommandTable, sink: S) -> Self {
        Self {
            table,
            sink,
            dispatched: 0,
        }
    }

    pub fn dispatch(&mut self, event: &GestureEvent) -> Result<Command> {
        let command = self
            .table
            .lookup(event.gesture)
            .cloned()
            .with_context(|| format!("No command bound to gesture '{}'", event.gesture))?;

        self.sink
            .send(command.key)
            .with_context(|| format!("Failed to send {:?}", command.key))?;
        self.dispatched += 1;

        info!("{} {} ({})", command.label, command.description, event.gesture);
        Ok(command)
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Logs each key instead of injecting it
#[derive(Debug, Default)]
pub struct LogKeySink;

impl KeySink for LogKeySink {
    fn send(&mut self, key: KeySignal) -> Result<()> {
        info!(key = key.key_name(), "key press");
        Ok(())
    }
}

/// Keeps every key it receives
#[derive(Debug, Default)]
pub struct RecordingKeySink {
    pub keys: Vec<KeySignal>,
}

impl KeySink for RecordingKeySink {
    fn send(&mut self, key: KeySignal) -> Result<()> {
        self.keys.push(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handcue_core::Gesture;

    struct FailingSink;

    impl KeySink for FailingSink {
        fn send(&mut self, _key: KeySignal) -> Result<()> {
            anyhow::bail!("window not focused")
        }
    }

    #[test]
    fn test_dispatch_sends_table_key() -> Result<()> {
        let mut dispatcher = Dispatcher::new(RecordingKeySink::default());

        let command = dispatcher.dispatch(&GestureEvent::new(Gesture::Open, 1.0))?;
        assert_eq!(command.description, "Play/Pause");
        dispatcher.dispatch(&GestureEvent::new(Gesture::SwipeRight, 2.0))?;
        dispatcher.dispatch(&GestureEvent::new(Gesture::Closed, 3.0))?;

        assert_eq!(
            dispatcher.sink().keys,
            vec![KeySignal::PlayPause, KeySignal::SeekBackward, KeySignal::FullscreenToggle]
        );
        assert_eq!(dispatcher.dispatched(), 3);
        Ok(())
    }

    #[test]
    fn test_unbound_gesture() {
        let table = CommandTable { commands: Vec::new() };
        let mut dispatcher = Dispatcher::with_table(table, RecordingKeySink::default());
        let result = dispatcher.dispatch(&GestureEvent::new(Gesture::SwipeUp, 0.0));
        assert!(result.is_err());
        assert!(dispatcher.into_sink().keys.is_empty());
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut dispatcher = Dispatcher::new(FailingSink);
        let err = dispatcher
            .dispatch(&GestureEvent::new(Gesture::SwipeDown, 0.0))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("window not focused"));
        assert_eq!(dispatcher.dispatched(), 0);
    }
}
