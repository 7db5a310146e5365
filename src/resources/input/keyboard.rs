//! Keyboard snapshot and tracker helpers.
use raylib::prelude::KeyboardKey;

use super::tracker::{ControlState, DeviceTracker};

/// Number of key codes covered by [`KeyboardSnapshot`]. Every raylib key code
/// is below this.
pub const KEY_CODE_COUNT: usize = 384;

const WORDS: usize = KEY_CODE_COUNT / 64;

/// Set of keys held down at one instant, as a fixed bitset indexed by raylib
/// key code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    bits: [u64; WORDS],
}

impl KeyboardSnapshot {
    /// Builder-style insert.
    pub fn with_key(mut self, key: KeyboardKey) -> Self {
        self.insert(key);
        self
    }

    pub fn insert(&mut self, key: KeyboardKey) {
        self.insert_code(key as usize);
    }

    pub fn remove(&mut self, key: KeyboardKey) {
        let code = key as usize;
        if code < KEY_CODE_COUNT {
            self.bits[code / 64] &= !(1u64 << (code % 64));
        }
    }

    /// Mark a raw key code as down. Codes outside the covered range are ignored.
    pub fn insert_code(&mut self, code: usize) {
        if code < KEY_CODE_COUNT {
            self.bits[code / 64] |= 1u64 << (code % 64);
        }
    }

    pub fn contains_code(&self, code: usize) -> bool {
        code < KEY_CODE_COUNT && self.bits[code / 64] & (1u64 << (code % 64)) != 0
    }

    /// Number of keys held down.
    pub fn pressed_count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }
}

impl ControlState for KeyboardSnapshot {
    type Control = KeyboardKey;

    fn is_active(&self, key: KeyboardKey) -> bool {
        self.contains_code(key as usize)
    }
}

/// Keyboard state tracker.
pub type KeyboardInfo = DeviceTracker<KeyboardSnapshot>;

impl DeviceTracker<KeyboardSnapshot> {
    pub fn is_key_down(&self, key: KeyboardKey) -> bool {
        self.is_active(key)
    }

    pub fn is_key_up(&self, key: KeyboardKey) -> bool {
        self.is_inactive(key)
    }

    pub fn was_key_just_pressed(&self, key: KeyboardKey) -> bool {
        self.just_activated(key)
    }

    pub fn was_key_just_released(&self, key: KeyboardKey) -> bool {
        self.just_deactivated(key)
    }
}
