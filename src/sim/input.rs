//! Held-key tracking
//!
//! Level-triggered: the simulation only ever asks "is this key down right now",
//! so press/release order between ticks does not matter.

use serde::{Deserialize, Serialize};

/// The four movement keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::LeftUp, Key::LeftDown, Key::RightUp, Key::RightDown];

    /// Map a `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::LeftUp),
            "s" | "S" => Some(Key::LeftDown),
            "ArrowUp" => Some(Key::RightUp),
            "ArrowDown" => Some(Key::RightDown),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Currently held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    held: [bool; 4],
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release by key name; returns false for keys we ignore
    pub fn on_key_change(&mut self, name: &str, pressed: bool) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.held[key.index()] = pressed;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }
}
