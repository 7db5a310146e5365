//! framekit library.
//!
//! Per-frame input edge detection and atlas-based sprite animation on top of
//! raylib, organised as bevy_ecs components, resources, systems, and events.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;
