//! Animation tick integration tests: world time, the animation system and
//! sprite resolution against the atlas.

use std::time::Duration;

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use framekit::components::animation::Animation;
use framekit::components::mapposition::MapPosition;
use framekit::components::sprite::Sprite;
use framekit::resources::atlas::TextureAtlas;
use framekit::resources::worldtime::WorldTime;
use framekit::systems::animation::animation;
use framekit::systems::render::collect_sprite_draws;
use framekit::systems::time::update_world_time;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Four 16x16 frames in a row, a looping "walk" at 100 ms per frame and a
/// two frame "blink" at 50 ms.
fn make_atlas() -> TextureAtlas {
    let mut atlas = TextureAtlas::new("sheet");
    let frames = atlas.add_strip("walk", 0, 0, 16, 16, 4).unwrap();
    atlas
        .add_animation("walk", Animation::new(frames, ms(100)))
        .unwrap();
    atlas
        .add_animation_from_regions("blink", &["walk_3", "walk_0"], ms(50))
        .unwrap();
    atlas
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(make_atlas());
    world
}

fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(world);
}

fn spawn_animated(world: &mut World, name: &str) -> Entity {
    let sprite = world
        .resource::<TextureAtlas>()
        .create_animated_sprite(name)
        .unwrap();
    world.spawn((sprite, MapPosition::new(0.0, 0.0))).id()
}

fn frame_and_elapsed(world: &World, entity: Entity) -> (usize, Duration) {
    let player = world.get::<Sprite>(entity).unwrap().player().unwrap();
    (player.frame_index(), player.elapsed())
}

#[test]
fn single_long_frame_catches_up() {
    let mut world = make_world();
    let e = spawn_animated(&mut world, "walk");

    tick(&mut world, 0.25);
    assert_eq!(frame_and_elapsed(&world, e), (2, ms(50)));

    tick(&mut world, 0.125);
    assert_eq!(frame_and_elapsed(&world, e), (3, ms(75)));
}

#[test]
fn many_small_frames_wrap_around() {
    let mut world = make_world();
    let e = spawn_animated(&mut world, "walk");

    // 0.125 s is exact in binary, so 10 ticks cover 1250 ms
    for _ in 0..10 {
        tick(&mut world, 0.125);
    }
    // 12 steps on a 4 frame loop
    assert_eq!(frame_and_elapsed(&world, e), (0, ms(50)));
}

#[test]
fn time_scale_speeds_up_playback() {
    let mut world = make_world();
    world.insert_resource(WorldTime::default().with_time_scale(2.0));
    let e = spawn_animated(&mut world, "walk");

    tick(&mut world, 0.125);
    assert_eq!(frame_and_elapsed(&world, e), (2, ms(50)));
}

#[test]
fn rebinding_live_entity_restarts_playback() {
    let mut world = make_world();
    let e = spawn_animated(&mut world, "walk");
    tick(&mut world, 0.25);

    let blink = world.resource::<TextureAtlas>().animation("blink").unwrap();
    world
        .get_mut::<Sprite>(e)
        .unwrap()
        .set_animation(blink)
        .unwrap();
    assert_eq!(frame_and_elapsed(&world, e), (0, ms(0)));

    let first = world.resource::<TextureAtlas>().region("walk_3").unwrap();
    assert_eq!(world.get::<Sprite>(e).unwrap().current_region(), first);

    tick(&mut world, 0.125);
    // 125 ms at 50 ms per frame: two steps on a two frame loop
    assert_eq!(frame_and_elapsed(&world, e), (0, ms(25)));
}

#[test]
fn rejected_rebind_keeps_playing() {
    let mut world = make_world();
    let e = spawn_animated(&mut world, "walk");
    tick(&mut world, 0.125);

    let empty = std::sync::Arc::new(Animation::default());
    assert!(world.get_mut::<Sprite>(e).unwrap().set_animation(empty).is_err());
    assert_eq!(frame_and_elapsed(&world, e), (1, ms(25)));

    tick(&mut world, 0.125);
    assert_eq!(frame_and_elapsed(&world, e), (2, ms(50)));
}

#[test]
fn static_sprites_are_untouched() {
    let mut world = make_world();
    let sprite = world
        .resource::<TextureAtlas>()
        .create_sprite("walk_2")
        .unwrap();
    let e = world.spawn((sprite, MapPosition::new(0.0, 0.0))).id();

    tick(&mut world, 1.0);

    let region = world.resource::<TextureAtlas>().region("walk_2").unwrap();
    let sprite = world.get::<Sprite>(e).unwrap();
    assert!(sprite.player().is_none());
    assert_eq!(sprite.current_region(), region);
}

#[test]
fn shared_animation_plays_independently() {
    let mut world = make_world();
    let early = spawn_animated(&mut world, "walk");
    tick(&mut world, 0.25);
    let late = spawn_animated(&mut world, "walk");
    tick(&mut world, 0.125);

    assert_eq!(frame_and_elapsed(&world, early), (3, ms(75)));
    assert_eq!(frame_and_elapsed(&world, late), (1, ms(25)));
}

#[test]
fn draw_follows_current_frame() {
    let mut world = make_world();
    let e = spawn_animated(&mut world, "walk");
    {
        let mut sprite = world.get_mut::<Sprite>(e).unwrap();
        sprite.attributes.scale = Vector2 { x: 2.0, y: 2.0 };
        sprite.attributes.flip_h = true;
    }
    world.get_mut::<MapPosition>(e).unwrap().pos = Vector2 { x: 100.0, y: 50.0 };

    tick(&mut world, 0.25);

    let draws = collect_sprite_draws(&mut world);
    assert_eq!(draws.len(), 1);
    let d = draws[0];
    // frame 2 of the strip
    assert_eq!(d.source.x, 32.0);
    assert_eq!(d.source.width, -16.0);
    assert_eq!(d.dest.x, 100.0);
    assert_eq!(d.dest.y, 50.0);
    assert_eq!(d.dest.width, 32.0);
}
