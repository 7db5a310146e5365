//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance animated sprites by the frame delta
//! - [`input`] – poll devices into [`crate::resources::input::InputManager`] and emit action events
//! - [`render`] – draw sprites in layer-depth order using raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod input;
pub mod render;
pub mod time;
