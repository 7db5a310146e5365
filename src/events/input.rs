//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when a gameplay
//! action is pressed or released. The [`InputAction`] enum lists all
//! recognized actions; [`InputBindings`](crate::resources::bindings::InputBindings)
//! maps them to physical keys and gamepad controls.
//!
//! Observers can react to these events instead of reading the
//! [`InputManager`](crate::resources::input::InputManager) resource directly.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::resources::debugmode::DebugMode;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Primary direction: up (default: W, Up arrow, d-pad up, left stick up).
    Up,
    /// Primary direction: down (default: S, Down arrow, d-pad down, left stick down).
    Down,
    /// Primary direction: left (default: A, Left arrow, d-pad left, left stick left).
    Left,
    /// Primary direction: right (default: D, Right arrow, d-pad right, left stick right).
    Right,
    /// Back/cancel action (default: Escape, right face right).
    Back,
    /// Primary action button (default: Space, right face down).
    Action1,
    /// Secondary action button (default: Enter, right face left).
    Action2,
    /// Special function (default: F12, middle right).
    Special,
    /// Toggle debug overlays (default: F11).
    DebugToggle,
}

impl InputAction {
    pub const ALL: [InputAction; 9] = [
        InputAction::Up,
        InputAction::Down,
        InputAction::Left,
        InputAction::Right,
        InputAction::Back,
        InputAction::Action1,
        InputAction::Action2,
        InputAction::Special,
        InputAction::DebugToggle,
    ];
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

/// Observer that logs every action edge at debug level.
pub fn log_input_event(trigger: On<InputEvent>) {
    let event = trigger.event();
    debug!(
        "{:?} {}",
        event.action,
        if event.pressed { "pressed" } else { "released" }
    );
}

/// Observer that flips the [`DebugMode`] resource when
/// [`InputAction::DebugToggle`] is pressed.
pub fn toggle_debug_mode(
    trigger: On<InputEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    let event = trigger.event();
    if event.action != InputAction::DebugToggle || !event.pressed {
        return;
    }
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        info!("Debug mode disabled");
    } else {
        commands.insert_resource(DebugMode);
        info!("Debug mode enabled");
    }
}
