//! Gamepad snapshot, controls and tracker helpers.
//!
//! Sticks are reported in `-1.0..=1.0`. Triggers are normalized to
//! `0.0..=1.0` (released to fully pulled) when the snapshot is captured.
use raylib::prelude::{GamepadAxis, GamepadButton, Vector2};

use super::tracker::{ControlState, DeviceTracker};

/// Number of gamepad slots tracked.
pub const MAX_GAMEPADS: usize = 4;

/// Default axis magnitude past which an axis counts as a pressed control.
pub const DEFAULT_AXIS_THRESHOLD: f32 = 0.5;

/// Every raylib gamepad button except `GAMEPAD_BUTTON_UNKNOWN`.
pub const GAMEPAD_BUTTONS: [GamepadButton; 17] = [
    GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_UP,
    GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_RIGHT,
    GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_DOWN,
    GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_LEFT,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_UP,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_RIGHT,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_LEFT,
    GamepadButton::GAMEPAD_BUTTON_LEFT_TRIGGER_1,
    GamepadButton::GAMEPAD_BUTTON_LEFT_TRIGGER_2,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_TRIGGER_1,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_TRIGGER_2,
    GamepadButton::GAMEPAD_BUTTON_MIDDLE_LEFT,
    GamepadButton::GAMEPAD_BUTTON_MIDDLE,
    GamepadButton::GAMEPAD_BUTTON_MIDDLE_RIGHT,
    GamepadButton::GAMEPAD_BUTTON_LEFT_THUMB,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_THUMB,
];

/// Every raylib gamepad axis, in code order.
pub const GAMEPAD_AXES: [GamepadAxis; 6] = [
    GamepadAxis::GAMEPAD_AXIS_LEFT_X,
    GamepadAxis::GAMEPAD_AXIS_LEFT_Y,
    GamepadAxis::GAMEPAD_AXIS_RIGHT_X,
    GamepadAxis::GAMEPAD_AXIS_RIGHT_Y,
    GamepadAxis::GAMEPAD_AXIS_LEFT_TRIGGER,
    GamepadAxis::GAMEPAD_AXIS_RIGHT_TRIGGER,
];

/// Player slot of a gamepad, `0..MAX_GAMEPADS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GamepadSlot(u8);

impl GamepadSlot {
    pub fn new(index: usize) -> Option<Self> {
        (index < MAX_GAMEPADS).then_some(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> [GamepadSlot; MAX_GAMEPADS] {
        [Self(0), Self(1), Self(2), Self(3)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    Positive,
    Negative,
}

/// Something on a gamepad that can be active or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadControl {
    Button(GamepadButton),
    /// Active when the axis is past the snapshot's threshold in `direction`.
    Axis {
        axis: GamepadAxis,
        direction: AxisDirection,
    },
}

impl From<GamepadButton> for GamepadControl {
    fn from(button: GamepadButton) -> Self {
        GamepadControl::Button(button)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadSnapshot {
    connected: bool,
    buttons: u32,
    axes: [f32; 6],
    axis_threshold: f32,
}

impl Default for GamepadSnapshot {
    fn default() -> Self {
        Self {
            connected: false,
            buttons: 0,
            axes: [0.0; 6],
            axis_threshold: DEFAULT_AXIS_THRESHOLD,
        }
    }
}

impl GamepadSnapshot {
    /// Snapshot of a connected pad with nothing pressed.
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: GamepadButton) -> Self {
        self.set_button(button, true);
        self
    }

    pub fn with_axis(mut self, axis: GamepadAxis, value: f32) -> Self {
        self.set_axis(axis, value);
        self
    }

    pub fn with_axis_threshold(mut self, threshold: f32) -> Self {
        self.axis_threshold = threshold;
        self
    }

    pub fn set_button(&mut self, button: GamepadButton, down: bool) {
        let bit = 1u32 << (button as u32);
        if down {
            self.buttons |= bit;
        } else {
            self.buttons &= !bit;
        }
    }

    pub fn set_axis(&mut self, axis: GamepadAxis, value: f32) {
        self.axes[axis as usize] = value;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn axis(&self, axis: GamepadAxis) -> f32 {
        if self.connected {
            self.axes[axis as usize]
        } else {
            0.0
        }
    }

    pub fn axis_threshold(&self) -> f32 {
        self.axis_threshold
    }
}

impl ControlState for GamepadSnapshot {
    type Control = GamepadControl;

    fn is_active(&self, control: GamepadControl) -> bool {
        if !self.connected {
            return false;
        }
        match control {
            GamepadControl::Button(button) => self.buttons & (1u32 << (button as u32)) != 0,
            GamepadControl::Axis { axis, direction } => {
                let value = self.axes[axis as usize];
                match direction {
                    AxisDirection::Positive => value > self.axis_threshold,
                    AxisDirection::Negative => value < -self.axis_threshold,
                }
            }
        }
    }
}

/// Gamepad state tracker for one slot.
pub type GamepadInfo = DeviceTracker<GamepadSnapshot>;

impl DeviceTracker<GamepadSnapshot> {
    pub fn is_connected(&self) -> bool {
        self.current().is_connected()
    }

    /// Connection state on the previous tick.
    pub fn was_connected(&self) -> bool {
        self.previous().is_connected()
    }

    pub fn just_connected(&self) -> bool {
        self.is_connected() && !self.was_connected()
    }

    pub fn just_disconnected(&self) -> bool {
        !self.is_connected() && self.was_connected()
    }

    pub fn is_button_down(&self, button: GamepadButton) -> bool {
        self.is_active(GamepadControl::Button(button))
    }

    pub fn is_button_up(&self, button: GamepadButton) -> bool {
        self.is_inactive(GamepadControl::Button(button))
    }

    pub fn was_button_just_pressed(&self, button: GamepadButton) -> bool {
        self.just_activated(GamepadControl::Button(button))
    }

    pub fn was_button_just_released(&self, button: GamepadButton) -> bool {
        self.just_deactivated(GamepadControl::Button(button))
    }

    pub fn left_thumbstick(&self) -> Vector2 {
        let s = self.current();
        Vector2 {
            x: s.axis(GamepadAxis::GAMEPAD_AXIS_LEFT_X),
            y: s.axis(GamepadAxis::GAMEPAD_AXIS_LEFT_Y),
        }
    }

    pub fn right_thumbstick(&self) -> Vector2 {
        let s = self.current();
        Vector2 {
            x: s.axis(GamepadAxis::GAMEPAD_AXIS_RIGHT_X),
            y: s.axis(GamepadAxis::GAMEPAD_AXIS_RIGHT_Y),
        }
    }

    pub fn left_trigger(&self) -> f32 {
        self.current().axis(GamepadAxis::GAMEPAD_AXIS_LEFT_TRIGGER)
    }

    pub fn right_trigger(&self) -> f32 {
        self.current().axis(GamepadAxis::GAMEPAD_AXIS_RIGHT_TRIGGER)
    }
}
