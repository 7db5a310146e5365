//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – frame animation data and looping playback state
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – drawable atlas region with paint attributes, static or animated

pub mod animation;
pub mod mapposition;
pub mod sprite;
