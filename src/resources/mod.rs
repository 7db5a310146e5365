//! ECS resources made available to systems.
//!
//! Overview
//! - `atlas` – named texture regions and animations built from them
//! - `bindings` – gameplay actions mapped to keys and gamepad controls
//! - `debugmode` – marker enabling debug overlays
//! - `gameconfig` – window and input settings loaded from an INI file
//! - `input` – per-device previous/current snapshots with edge queries
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod atlas;
pub mod bindings;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod texturestore;
pub mod worldtime;
