//! Device polling.
//!
//! [`InputBackend`] is the only way trackers learn about hardware. The raylib
//! implementation polls the window's input state; tests provide scripted
//! backends instead.
use raylib::RaylibHandle;
use raylib::ffi;
use raylib::prelude::GamepadAxis;

use super::gamepad::{GAMEPAD_AXES, GAMEPAD_BUTTONS, GamepadSlot, GamepadSnapshot};
use super::keyboard::{KEY_CODE_COUNT, KeyboardSnapshot};
use super::mouse::{MOUSE_BUTTONS, MouseSnapshot};

/// Source of raw device snapshots, polled once per tick per device.
pub trait InputBackend {
    fn keyboard(&self) -> KeyboardSnapshot;
    fn mouse(&self) -> MouseSnapshot;
    fn gamepad(&self, slot: GamepadSlot) -> GamepadSnapshot;
}

impl InputBackend for RaylibHandle {
    fn keyboard(&self) -> KeyboardSnapshot {
        let mut snapshot = KeyboardSnapshot::default();
        // Code 0 is KEY_NULL.
        for code in 1..KEY_CODE_COUNT {
            // SAFETY: IsKeyDown only reads raylib's key state table and
            // bounds-checks the code; the handle proves the window is open.
            if unsafe { ffi::IsKeyDown(code as i32) } {
                snapshot.insert_code(code);
            }
        }
        snapshot
    }

    fn mouse(&self) -> MouseSnapshot {
        let position = self.get_mouse_position();
        let mut snapshot =
            MouseSnapshot::at(position.x, position.y).with_wheel(self.get_mouse_wheel_move());
        for button in MOUSE_BUTTONS {
            snapshot.set_button(button, self.is_mouse_button_down(button));
        }
        snapshot
    }

    fn gamepad(&self, slot: GamepadSlot) -> GamepadSnapshot {
        let pad = slot.index() as i32;
        if !self.is_gamepad_available(pad) {
            return GamepadSnapshot::default();
        }
        let mut snapshot = GamepadSnapshot::connected();
        for button in GAMEPAD_BUTTONS {
            snapshot.set_button(button, self.is_gamepad_button_down(pad, button));
        }
        for axis in GAMEPAD_AXES {
            let raw = self.get_gamepad_axis_movement(pad, axis);
            let value = match axis {
                // raylib reports triggers as -1 (released) .. 1 (pulled)
                GamepadAxis::GAMEPAD_AXIS_LEFT_TRIGGER | GamepadAxis::GAMEPAD_AXIS_RIGHT_TRIGGER => {
                    (raw + 1.0) * 0.5
                }
                _ => raw,
            };
            snapshot.set_axis(axis, value);
        }
        snapshot
    }
}
