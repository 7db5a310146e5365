//! Debug toggle resource.
//!
//! The presence of this resource enables debug overlays. It is flipped by
//! [`toggle_debug_mode`](crate::events::input::toggle_debug_mode) whenever
//! [`InputAction::DebugToggle`](crate::events::input::InputAction::DebugToggle)
//! is pressed.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass outlines every sprite.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
