//! Input systems.
//!
//! - [`update_input_state`] polls raylib each frame and advances every tracker
//!   in [`InputManager`].
//! - [`emit_input_events`] triggers an [`InputEvent`] for every bound action
//!   that was pressed or released this frame.
use bevy_ecs::prelude::*;

use crate::events::input::InputEvent;
use crate::resources::bindings::InputBindings;
use crate::resources::input::InputManager;

/// Poll raylib for device state and update the `InputManager` resource.
pub fn update_input_state(mut input: ResMut<InputManager>, rl: NonSend<raylib::RaylibHandle>) {
    input.update(&*rl);
}

/// Trigger press/release events for bound actions.
///
/// Must run after the input state was updated for this frame.
pub fn emit_input_events(
    input: Res<InputManager>,
    bindings: Res<InputBindings>,
    mut commands: Commands,
) {
    for (action, _) in bindings.iter() {
        if bindings.action_just_activated(&input, *action) {
            commands.trigger(InputEvent {
                action: *action,
                pressed: true,
            });
        } else if bindings.action_just_deactivated(&input, *action) {
            commands.trigger(InputEvent {
                action: *action,
                pressed: false,
            });
        }
    }
}
