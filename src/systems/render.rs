//! Sprite render pass.
//!
//! Sprites are resolved against the [`TextureAtlas`] and drawn with the atlas
//! texture in layer-depth order. While [`DebugMode`] is present each sprite's
//! destination rectangle is outlined.
use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::{Color, RaylibDraw};
use rustc_hash::FxHashSet;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::{Sprite, SpriteDraw};
use crate::resources::atlas::TextureAtlas;
use crate::resources::debugmode::DebugMode;
use crate::resources::texturestore::TextureStore;

/// Entities already reported as undrawable, so each is warned about once.
#[derive(Resource, Debug, Default)]
pub struct SkippedSprites(pub FxHashSet<Entity>);

/// Resolve every positioned sprite against the atlas, sorted by layer depth
/// (lowest first). Sprites whose region is gone are skipped.
pub fn collect_sprite_draws(world: &mut World) -> Vec<SpriteDraw> {
    let mut q = world.query::<(Entity, &Sprite, &MapPosition)>();
    let atlas = world.resource::<TextureAtlas>();
    let mut draws = Vec::new();
    let mut failed = Vec::new();
    for (entity, sprite, position) in q.iter(world) {
        match sprite.draw_params(atlas, position.pos) {
            Ok(draw) => draws.push(draw),
            Err(e) => failed.push((entity, e)),
        }
    }

    let mut skipped = world.get_resource_or_insert_with(SkippedSprites::default);
    for (entity, e) in failed {
        if skipped.0.insert(entity) {
            warn!("Skipping sprite on {:?}: {}", entity, e);
        }
    }

    // stable: equal depths keep query order
    draws.sort_by(|a, b| a.layer_depth.total_cmp(&b.layer_depth));
    draws
}

/// Draw every sprite with the atlas texture.
pub fn render_sprites<D: RaylibDraw>(world: &mut World, d: &mut D) {
    let draws = collect_sprite_draws(world);
    if draws.is_empty() {
        return;
    }
    let key = world.resource::<TextureAtlas>().texture_key().to_string();
    let textures = world.non_send_resource::<TextureStore>();
    let Some(tex) = textures.get(&key) else {
        warn!("Atlas texture '{}' not found in TextureStore", key);
        return;
    };
    for draw in &draws {
        d.draw_texture_pro(
            tex,
            draw.source,
            draw.dest,
            draw.origin,
            draw.rotation,
            draw.tint,
        );
    }

    if world.contains_resource::<DebugMode>() {
        // unrotated bounds
        for draw in &draws {
            d.draw_rectangle_lines(
                (draw.dest.x - draw.origin.x) as i32,
                (draw.dest.y - draw.origin.y) as i32,
                draw.dest.width as i32,
                draw.dest.height as i32,
                Color::LIME,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn world_with_atlas() -> World {
        let mut atlas = TextureAtlas::new("sheet");
        atlas.add_strip("walk", 0, 0, 16, 16, 2).unwrap();
        atlas
            .add_animation_from_regions("walk", &["walk_0", "walk_1"], Duration::from_millis(50))
            .unwrap();
        let mut world = World::new();
        world.insert_resource(atlas);
        world
    }

    #[test]
    fn test_sorted_by_layer_depth() {
        let mut world = world_with_atlas();
        let atlas = world.resource::<TextureAtlas>().clone();
        for (depth, x) in [(0.5, 1.0), (0.1, 2.0), (0.9, 3.0)] {
            let mut s = atlas.create_sprite("walk_0").unwrap();
            s.attributes.layer_depth = depth;
            world.spawn((s, MapPosition::new(x, 0.0)));
        }
        let draws = collect_sprite_draws(&mut world);
        let xs: Vec<f32> = draws.iter().map(|d| d.dest.x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_unpositioned_and_stale_sprites_skipped() {
        let mut world = world_with_atlas();
        let atlas = world.resource::<TextureAtlas>().clone();
        world.spawn(atlas.create_sprite("walk_0").unwrap());
        world.spawn((atlas.create_sprite("walk_1").unwrap(), MapPosition::new(0.0, 0.0)));
        world.spawn((atlas.create_sprite("walk_0").unwrap(), MapPosition::new(0.0, 0.0)));
        world
            .resource_mut::<TextureAtlas>()
            .remove_region("walk_1")
            .unwrap();

        let draws = collect_sprite_draws(&mut world);
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].source.x, 0.0);
    }

    #[test]
    fn test_stale_sprite_reported_once() {
        let mut world = world_with_atlas();
        let atlas = world.resource::<TextureAtlas>().clone();
        let stale = world
            .spawn((atlas.create_sprite("walk_1").unwrap(), MapPosition::new(0.0, 0.0)))
            .id();
        world.spawn((atlas.create_sprite("walk_0").unwrap(), MapPosition::new(0.0, 0.0)));
        world
            .resource_mut::<TextureAtlas>()
            .remove_region("walk_1")
            .unwrap();

        for _ in 0..3 {
            assert_eq!(collect_sprite_draws(&mut world).len(), 1);
        }
        let skipped = world.resource::<SkippedSprites>();
        assert_eq!(skipped.0.len(), 1);
        assert!(skipped.0.contains(&stale));
    }

    #[test]
    fn test_drawable_sprites_are_not_reported() {
        let mut world = world_with_atlas();
        let atlas = world.resource::<TextureAtlas>().clone();
        world.spawn((atlas.create_sprite("walk_0").unwrap(), MapPosition::new(0.0, 0.0)));
        collect_sprite_draws(&mut world);
        assert!(world.resource::<SkippedSprites>().0.is_empty());
    }
}
