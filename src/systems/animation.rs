//! Animation system.
//!
//! [`animation`] advances every animated [`Sprite`] by the frame delta. The
//! region a sprite shows is read from its player at draw time, so nothing
//! else needs updating here.
//!
//! # Related
//!
//! - [`crate::components::animation::AnimationPlayer`] – per-entity playback state
//! - [`crate::resources::atlas::TextureAtlas`] – animation definitions

use bevy_ecs::prelude::*;

use crate::components::sprite::{Sprite, SpriteSource};
use crate::resources::worldtime::WorldTime;

/// Advance animation playback.
///
/// Reads [`WorldTime`] for the scaled delta. Static sprites are skipped.
pub fn animation(mut query: Query<&mut Sprite>, time: Res<WorldTime>) {
    for mut sprite in query.iter_mut() {
        if let SpriteSource::Animated(player) = &mut sprite.source {
            player.advance(time.delta);
        }
    }
}
