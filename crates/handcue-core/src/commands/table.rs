use serde::{Deserialize, Serialize};

use crate::hand::Gesture;

/// Abstract media-player key, independent of how it is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeySignal {
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    PlayPause,
    FullscreenToggle,
}

impl KeySignal {
    /// Key name understood by browser video players.
    pub fn key_name(&self) -> &'static str {
        match self {
            Self::SeekForward => "l",
            Self::SeekBackward => "j",
            Self::VolumeUp => "up",
            Self::VolumeDown => "down",
            Self::PlayPause => "k",
            Self::FullscreenToggle => "f",
        }
    }
}

/// What a gesture does once dispatched (Serialize only, fields borrow static text)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub gesture: Gesture,
    pub label: &'static str,
    pub key: KeySignal,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct CommandTable {
    pub commands: Vec<Command>,
}

impl CommandTable {
    /// The fixed gesture to key mapping.
    pub fn standard() -> Self {
        let commands = vec![
            Command {
                gesture: Gesture::SwipeLeft,
                label: "←",
                key: KeySignal::SeekForward,
                description: "Skip forward 10s",
            },
            Command {
                gesture: Gesture::SwipeRight,
                label: "→",
                key: KeySignal::SeekBackward,
                description: "Skip backward 10s",
            },
            Command {
                gesture: Gesture::SwipeUp,
                label: "↑",
                key: KeySignal::VolumeUp,
                description: "Volume up",
            },
            Command {
                gesture: Gesture::SwipeDown,
                label: "↓",
                key: KeySignal::VolumeDown,
                description: "Volume down",
            },
            Command {
                gesture: Gesture::Open,
                label: "👋",
                key: KeySignal::PlayPause,
                description: "Play/Pause",
            },
            Command {
                gesture: Gesture::Closed,
                label: "✊",
                key: KeySignal::FullscreenToggle,
                description: "Fullscreen toggle",
            },
        ];
        CommandTable { commands }
    }

    pub fn lookup(&self, gesture: Gesture) -> Option<&Command> {
        self.commands.iter().find(|c| c.gesture == gesture)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// One "label gesture -> description" line per command, for on-screen guides.
    pub fn guide_lines(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|c| format!("{} {} -> {}", c.label, c.gesture, c.description))
            .collect()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}
