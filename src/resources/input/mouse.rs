//! Mouse snapshot and tracker helpers.
use raylib::prelude::{MouseButton, Vector2};

use super::tracker::{ControlState, DeviceTracker};

/// Every raylib mouse button, in code order.
pub const MOUSE_BUTTONS: [MouseButton; 7] = [
    MouseButton::MOUSE_BUTTON_LEFT,
    MouseButton::MOUSE_BUTTON_RIGHT,
    MouseButton::MOUSE_BUTTON_MIDDLE,
    MouseButton::MOUSE_BUTTON_SIDE,
    MouseButton::MOUSE_BUTTON_EXTRA,
    MouseButton::MOUSE_BUTTON_FORWARD,
    MouseButton::MOUSE_BUTTON_BACK,
];

/// Mouse buttons, pointer position and wheel movement at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseSnapshot {
    buttons: u8,
    /// Pointer position in window coordinates.
    pub position: Vector2,
    /// Wheel movement accumulated since the previous poll.
    pub wheel: f32,
}

impl Default for MouseSnapshot {
    fn default() -> Self {
        Self {
            buttons: 0,
            position: Vector2 { x: 0.0, y: 0.0 },
            wheel: 0.0,
        }
    }
}

impl MouseSnapshot {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.set_button(button, true);
        self
    }

    pub fn with_wheel(mut self, wheel: f32) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        let bit = 1u8 << (button as u32);
        if down {
            self.buttons |= bit;
        } else {
            self.buttons &= !bit;
        }
    }
}

impl ControlState for MouseSnapshot {
    type Control = MouseButton;

    fn is_active(&self, button: MouseButton) -> bool {
        self.buttons & (1u8 << (button as u32)) != 0
    }
}

/// Mouse state tracker.
pub type MouseInfo = DeviceTracker<MouseSnapshot>;

impl DeviceTracker<MouseSnapshot> {
    /// Pointer position this tick.
    pub fn position(&self) -> Vector2 {
        self.current().position
    }

    /// Pointer movement between the previous and the current tick.
    pub fn position_delta(&self) -> Vector2 {
        let (now, before) = (self.current().position, self.previous().position);
        Vector2 {
            x: now.x - before.x,
            y: now.y - before.y,
        }
    }

    pub fn was_moved(&self) -> bool {
        self.current().position != self.previous().position
    }

    /// Wheel movement reported for this tick.
    pub fn scroll_wheel(&self) -> f32 {
        self.current().wheel
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.is_active(button)
    }

    pub fn is_button_up(&self, button: MouseButton) -> bool {
        self.is_inactive(button)
    }

    pub fn was_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_activated(button)
    }

    pub fn was_button_just_released(&self, button: MouseButton) -> bool {
        self.just_deactivated(button)
    }
}
