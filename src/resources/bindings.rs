//! Mapping from gameplay actions to physical controls.
//!
//! Each [`InputAction`] is bound to any number of keyboard keys and gamepad
//! controls. An action is active while any of its controls is active on the
//! keyboard or on any connected gamepad. Edges are computed on the aggregate,
//! so holding W and then also pressing Up does not fire a second press.
use bevy_ecs::prelude::*;
use raylib::prelude::{GamepadAxis, GamepadButton, KeyboardKey};

use crate::events::input::InputAction;
use crate::resources::input::{AxisDirection, ControlState, GamepadControl, InputManager};

/// Controls bound to one action.
#[derive(Debug, Clone, Default)]
pub struct ActionBinding {
    pub keys: Vec<KeyboardKey>,
    pub gamepad: Vec<GamepadControl>,
}

impl ActionBinding {
    pub fn keys(keys: &[KeyboardKey]) -> Self {
        Self {
            keys: keys.to_vec(),
            gamepad: Vec::new(),
        }
    }

    pub fn with_gamepad(mut self, control: impl Into<GamepadControl>) -> Self {
        self.gamepad.push(control.into());
        self
    }
}

/// Resource holding the action bindings, in a stable order.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    bindings: Vec<(InputAction, ActionBinding)>,
}

fn stick(axis: GamepadAxis, direction: AxisDirection) -> GamepadControl {
    GamepadControl::Axis { axis, direction }
}

impl Default for InputBindings {
    fn default() -> Self {
        use AxisDirection::{Negative, Positive};
        use GamepadAxis::{GAMEPAD_AXIS_LEFT_X, GAMEPAD_AXIS_LEFT_Y};
        use GamepadButton::*;
        use KeyboardKey::*;

        let mut bindings = Self::empty();
        bindings.bind(
            InputAction::Up,
            ActionBinding::keys(&[KEY_W, KEY_UP])
                .with_gamepad(GAMEPAD_BUTTON_LEFT_FACE_UP)
                .with_gamepad(stick(GAMEPAD_AXIS_LEFT_Y, Negative)),
        );
        bindings.bind(
            InputAction::Down,
            ActionBinding::keys(&[KEY_S, KEY_DOWN])
                .with_gamepad(GAMEPAD_BUTTON_LEFT_FACE_DOWN)
                .with_gamepad(stick(GAMEPAD_AXIS_LEFT_Y, Positive)),
        );
        bindings.bind(
            InputAction::Left,
            ActionBinding::keys(&[KEY_A, KEY_LEFT])
                .with_gamepad(GAMEPAD_BUTTON_LEFT_FACE_LEFT)
                .with_gamepad(stick(GAMEPAD_AXIS_LEFT_X, Negative)),
        );
        bindings.bind(
            InputAction::Right,
            ActionBinding::keys(&[KEY_D, KEY_RIGHT])
                .with_gamepad(GAMEPAD_BUTTON_LEFT_FACE_RIGHT)
                .with_gamepad(stick(GAMEPAD_AXIS_LEFT_X, Positive)),
        );
        bindings.bind(
            InputAction::Back,
            ActionBinding::keys(&[KEY_ESCAPE]).with_gamepad(GAMEPAD_BUTTON_RIGHT_FACE_RIGHT),
        );
        bindings.bind(
            InputAction::Action1,
            ActionBinding::keys(&[KEY_SPACE]).with_gamepad(GAMEPAD_BUTTON_RIGHT_FACE_DOWN),
        );
        bindings.bind(
            InputAction::Action2,
            ActionBinding::keys(&[KEY_ENTER]).with_gamepad(GAMEPAD_BUTTON_RIGHT_FACE_LEFT),
        );
        bindings.bind(
            InputAction::Special,
            ActionBinding::keys(&[KEY_F12]).with_gamepad(GAMEPAD_BUTTON_MIDDLE_RIGHT),
        );
        bindings.bind(InputAction::DebugToggle, ActionBinding::keys(&[KEY_F11]));
        bindings
    }
}

impl InputBindings {
    /// No action bound to anything.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Replace the binding of `action`.
    pub fn bind(&mut self, action: InputAction, binding: ActionBinding) {
        match self.bindings.iter_mut().find(|(a, _)| *a == action) {
            Some((_, existing)) => *existing = binding,
            None => self.bindings.push((action, binding)),
        }
    }

    pub fn binding(&self, action: InputAction) -> Option<&ActionBinding> {
        self.bindings
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, b)| b)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(InputAction, ActionBinding)> {
        self.bindings.iter()
    }

    pub fn is_action_active(&self, input: &InputManager, action: InputAction) -> bool {
        self.binding(action)
            .is_some_and(|b| evaluate(b, input, Tick::Current))
    }

    pub fn action_just_activated(&self, input: &InputManager, action: InputAction) -> bool {
        self.binding(action).is_some_and(|b| {
            evaluate(b, input, Tick::Current) && !evaluate(b, input, Tick::Previous)
        })
    }

    pub fn action_just_deactivated(&self, input: &InputManager, action: InputAction) -> bool {
        self.binding(action).is_some_and(|b| {
            !evaluate(b, input, Tick::Current) && evaluate(b, input, Tick::Previous)
        })
    }
}

#[derive(Clone, Copy)]
enum Tick {
    Previous,
    Current,
}

fn evaluate(binding: &ActionBinding, input: &InputManager, tick: Tick) -> bool {
    let keyboard = match tick {
        Tick::Previous => input.keyboard.previous(),
        Tick::Current => input.keyboard.current(),
    };
    if binding.keys.iter().any(|&k| keyboard.is_active(k)) {
        return true;
    }
    input.gamepads().any(|(_, pad)| {
        let snapshot = match tick {
            Tick::Previous => pad.previous(),
            Tick::Current => pad.current(),
        };
        binding.gamepad.iter().any(|&c| snapshot.is_active(c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::{
        GamepadSlot, GamepadSnapshot, InputBackend, KeyboardSnapshot, MouseSnapshot,
    };
    use std::cell::Cell;

    struct Backend {
        keyboard: Cell<KeyboardSnapshot>,
        pad0: Cell<GamepadSnapshot>,
    }

    impl Backend {
        fn new() -> Self {
            Self {
                keyboard: Cell::new(KeyboardSnapshot::default()),
                pad0: Cell::new(GamepadSnapshot::default()),
            }
        }
    }

    impl InputBackend for Backend {
        fn keyboard(&self) -> KeyboardSnapshot {
            self.keyboard.get()
        }
        fn mouse(&self) -> MouseSnapshot {
            MouseSnapshot::default()
        }
        fn gamepad(&self, slot: GamepadSlot) -> GamepadSnapshot {
            if slot.index() == 0 {
                self.pad0.get()
            } else {
                GamepadSnapshot::default()
            }
        }
    }

    #[test]
    fn test_default_bindings_cover_every_action() {
        let bindings = InputBindings::default();
        for action in InputAction::ALL {
            assert!(bindings.binding(action).is_some(), "{action:?} unbound");
        }
        let up = bindings.binding(InputAction::Up).unwrap();
        assert_eq!(up.keys, vec![KeyboardKey::KEY_W, KeyboardKey::KEY_UP]);
    }

    #[test]
    fn test_bind_replaces_existing() {
        let mut bindings = InputBindings::default();
        bindings.bind(InputAction::Action1, ActionBinding::keys(&[KeyboardKey::KEY_J]));
        let b = bindings.binding(InputAction::Action1).unwrap();
        assert_eq!(b.keys, vec![KeyboardKey::KEY_J]);
        assert!(b.gamepad.is_empty());
        assert_eq!(bindings.iter().count(), InputAction::ALL.len());
    }

    #[test]
    fn test_any_key_activates_action() {
        let backend = Backend::new();
        let bindings = InputBindings::default();
        let mut input = InputManager::new(&backend, 0.5);

        backend
            .keyboard
            .set(KeyboardSnapshot::default().with_key(KeyboardKey::KEY_UP));
        input.update(&backend);
        assert!(bindings.is_action_active(&input, InputAction::Up));
        assert!(bindings.action_just_activated(&input, InputAction::Up));
        assert!(!bindings.is_action_active(&input, InputAction::Down));
    }

    #[test]
    fn test_second_key_on_held_action_is_not_a_new_press() {
        let backend = Backend::new();
        let bindings = InputBindings::default();
        let mut input = InputManager::new(&backend, 0.5);

        backend
            .keyboard
            .set(KeyboardSnapshot::default().with_key(KeyboardKey::KEY_W));
        input.update(&backend);
        backend.keyboard.set(
            KeyboardSnapshot::default()
                .with_key(KeyboardKey::KEY_W)
                .with_key(KeyboardKey::KEY_UP),
        );
        input.update(&backend);
        assert!(!bindings.action_just_activated(&input, InputAction::Up));

        // Releasing one of two held keys keeps the action held.
        backend
            .keyboard
            .set(KeyboardSnapshot::default().with_key(KeyboardKey::KEY_UP));
        input.update(&backend);
        assert!(!bindings.action_just_deactivated(&input, InputAction::Up));
        assert!(bindings.is_action_active(&input, InputAction::Up));
    }

    #[test]
    fn test_gamepad_button_and_stick() {
        let backend = Backend::new();
        let bindings = InputBindings::default();
        let mut input = InputManager::new(&backend, 0.5);

        backend.pad0.set(
            GamepadSnapshot::connected()
                .with_button(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN)
                .with_axis(GamepadAxis::GAMEPAD_AXIS_LEFT_X, -1.0),
        );
        input.update(&backend);
        assert!(bindings.action_just_activated(&input, InputAction::Action1));
        assert!(bindings.action_just_activated(&input, InputAction::Left));
        assert!(!bindings.is_action_active(&input, InputAction::Right));

        backend.pad0.set(GamepadSnapshot::default());
        input.update(&backend);
        assert!(bindings.action_just_deactivated(&input, InputAction::Action1));
        assert!(bindings.action_just_deactivated(&input, InputAction::Left));
    }

    #[test]
    fn test_empty_bindings_never_fire() {
        let backend = Backend::new();
        backend
            .keyboard
            .set(KeyboardSnapshot::default().with_key(KeyboardKey::KEY_SPACE));
        let input = InputManager::new(&backend, 0.5);
        let bindings = InputBindings::empty();
        assert!(!bindings.is_action_active(&input, InputAction::Action1));
        assert!(!bindings.action_just_activated(&input, InputAction::Action1));
    }
}
