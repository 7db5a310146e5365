//! Per-frame input state resource.
//!
//! [`InputManager`] owns one [`DeviceTracker`] per device: the keyboard, the
//! mouse, and one per gamepad slot. The input system calls
//! [`InputManager::update`] once per frame with an [`InputBackend`]; gameplay
//! systems then read continuous and edge-triggered state from it.
//!
//! Submodules:
//! - [`tracker`] – generic previous/current snapshot edge detector
//! - [`keyboard`], [`mouse`], [`gamepad`] – snapshot types per device
//! - [`backend`] – polling trait and its raylib implementation
use bevy_ecs::prelude::*;

pub mod backend;
pub mod gamepad;
pub mod keyboard;
pub mod mouse;
pub mod tracker;

pub use backend::InputBackend;
pub use gamepad::{
    AxisDirection, GamepadControl, GamepadInfo, GamepadSlot, GamepadSnapshot, MAX_GAMEPADS,
};
pub use keyboard::{KeyboardInfo, KeyboardSnapshot};
pub use mouse::{MouseInfo, MouseSnapshot};
pub use tracker::{ControlState, DeviceTracker};

/// Resource aggregating every device tracker.
#[derive(Resource, Debug, Clone)]
pub struct InputManager {
    pub keyboard: KeyboardInfo,
    pub mouse: MouseInfo,
    gamepads: [GamepadInfo; MAX_GAMEPADS],
    axis_threshold: f32,
}

impl InputManager {
    /// Create the trackers, fetching every device's current state right away.
    ///
    /// `axis_threshold` is stamped onto every gamepad snapshot and decides
    /// when an axis counts as an active control.
    pub fn new(backend: &impl InputBackend, axis_threshold: f32) -> Self {
        let gamepads = GamepadSlot::all().map(|slot| {
            GamepadInfo::new(backend.gamepad(slot).with_axis_threshold(axis_threshold))
        });
        Self {
            keyboard: KeyboardInfo::new(backend.keyboard()),
            mouse: MouseInfo::new(backend.mouse()),
            gamepads,
            axis_threshold,
        }
    }

    /// Advance every tracker by one tick.
    pub fn update(&mut self, backend: &impl InputBackend) {
        self.keyboard.update(backend.keyboard());
        self.mouse.update(backend.mouse());
        for slot in GamepadSlot::all() {
            let snapshot = backend.gamepad(slot).with_axis_threshold(self.axis_threshold);
            let pad = &mut self.gamepads[slot.index()];
            pad.update(snapshot);
            if pad.just_connected() {
                log::info!("Gamepad {} connected", slot.index());
            } else if pad.just_disconnected() {
                log::info!("Gamepad {} disconnected", slot.index());
            }
        }
    }

    pub fn gamepad(&self, slot: GamepadSlot) -> &GamepadInfo {
        &self.gamepads[slot.index()]
    }

    pub fn gamepads(&self) -> impl Iterator<Item = (GamepadSlot, &GamepadInfo)> {
        GamepadSlot::all().into_iter().zip(self.gamepads.iter())
    }

    pub fn axis_threshold(&self) -> f32 {
        self.axis_threshold
    }
}
