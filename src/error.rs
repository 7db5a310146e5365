//! Error types.
//!
//! - [`AnimationError`] – an animation cannot be played back (bind-time misuse).
//! - [`AtlasError`] – a named region/animation lookup or registration failed.
//! - [`ConfigError`] – the configuration file could not be read or written.

use thiserror::Error;

use crate::resources::atlas::RegionId;

/// Rejected attempt to bind an animation to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("animation has no frames")]
    NoFrames,

    #[error("animation delay must be greater than zero")]
    NonPositiveDelay,
}

/// Failure at the atlas boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error("region not found: {0}")]
    RegionNotFound(String),

    #[error("animation not found: {0}")]
    AnimationNotFound(String),

    #[error("region {0:?} was removed from the atlas")]
    StaleRegion(RegionId),

    #[error("duplicate region name: {0}")]
    DuplicateRegion(String),

    #[error("duplicate animation name: {0}")]
    DuplicateAnimation(String),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// The configuration file could not be read or written.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    Load(String),

    #[error("failed to save config file: {0}")]
    Save(#[from] std::io::Error),
}
