//! framekit demo.
//!
//! Opens a raylib window, slices a horizontal sprite strip into an atlas and
//! plays it on a sprite in the middle of the screen.
//!
//! - Space / gamepad A: swap between the forward and reverse animation
//!   (playback restarts at the first frame)
//! - WASD / arrows / d-pad / left stick: move the sprite
//! - Left click: move the sprite to the pointer
//! - F11: outline sprites
//! - Escape: quit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --texture assets/slime.png --frames 4 --frame-width 32 --frame-height 32
//! ```

use std::path::PathBuf;
use std::time::Duration;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::{Color, MouseButton, RaylibDraw, Vector2};

use framekit::components::animation::Animation;
use framekit::components::mapposition::MapPosition;
use framekit::components::sprite::Sprite;
use framekit::error::AtlasError;
use framekit::events::input::{InputAction, InputEvent, log_input_event, toggle_debug_mode};
use framekit::resources::atlas::TextureAtlas;
use framekit::resources::bindings::InputBindings;
use framekit::resources::gameconfig::GameConfig;
use framekit::resources::input::InputManager;
use framekit::resources::texturestore::TextureStore;
use framekit::resources::worldtime::WorldTime;
use framekit::systems::animation::animation;
use framekit::systems::input::{emit_input_events, update_input_state};
use framekit::systems::render::render_sprites;
use framekit::systems::time::update_world_time;

const TEXTURE_KEY: &str = "sheet";
const MOVE_SPEED: f32 = 120.0;

/// framekit sprite animation demo
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Sprite strip texture.
    #[arg(long, value_name = "PATH", default_value = "assets/sprites.png")]
    texture: PathBuf,

    /// Width of one frame in pixels.
    #[arg(long, default_value_t = 32)]
    frame_width: i32,

    /// Height of one frame in pixels.
    #[arg(long, default_value_t = 32)]
    frame_height: i32,

    /// Number of frames in the strip.
    #[arg(long, default_value_t = 4)]
    frames: usize,

    /// Time each frame is shown, in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
}

/// Which of the two demo animations is playing.
#[derive(Resource, Default)]
struct Reversed(bool);

fn build_atlas(cli: &Cli) -> Result<TextureAtlas, AtlasError> {
    let mut atlas = TextureAtlas::new(TEXTURE_KEY);
    let frames = atlas.add_strip("frame", 0, 0, cli.frame_width, cli.frame_height, cli.frames)?;
    let delay = Duration::from_millis(cli.delay_ms);
    atlas.add_animation("forward", Animation::new(frames.clone(), delay))?;
    atlas.add_animation(
        "reverse",
        Animation::new(frames.into_iter().rev().collect(), delay),
    )?;
    Ok(atlas)
}

/// Swap the animation of every sprite when Action1 is pressed.
fn swap_animation_observer(
    trigger: On<InputEvent>,
    atlas: Res<TextureAtlas>,
    mut reversed: ResMut<Reversed>,
    mut sprites: Query<&mut Sprite>,
) {
    let event = trigger.event();
    if event.action != InputAction::Action1 || !event.pressed {
        return;
    }
    reversed.0 = !reversed.0;
    let name = if reversed.0 { "reverse" } else { "forward" };
    let animation = match atlas.animation(name) {
        Ok(a) => a,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };
    for mut sprite in sprites.iter_mut() {
        if let Err(e) = sprite.set_animation(animation.clone()) {
            log::error!("Cannot play '{}': {}", name, e);
        }
    }
    log::info!("Playing '{}'", name);
}

/// Move sprites with the direction actions and the mouse.
fn move_sprites(
    input: Res<InputManager>,
    bindings: Res<InputBindings>,
    time: Res<WorldTime>,
    mut query: Query<(&mut Sprite, &mut MapPosition)>,
) {
    let step = MOVE_SPEED * time.delta.as_secs_f32();
    let axis = |neg: InputAction, pos: InputAction| {
        bindings.is_action_active(&input, pos) as i32 as f32
            - bindings.is_action_active(&input, neg) as i32 as f32
    };
    let dx = axis(InputAction::Left, InputAction::Right);
    let dy = axis(InputAction::Up, InputAction::Down);
    let clicked = input
        .mouse
        .was_button_just_pressed(MouseButton::MOUSE_BUTTON_LEFT);

    for (mut sprite, mut position) in query.iter_mut() {
        if clicked {
            position.pos = input.mouse.position();
        }
        position.pos.x += dx * step;
        position.pos.y += dy * step;
        if dx != 0.0 {
            sprite.attributes.flip_h = dx < 0.0;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    let atlas = match build_atlas(&cli) {
        Ok(atlas) => atlas,
        Err(e) => {
            eprintln!("Error building atlas: {e}");
            std::process::exit(1);
        }
    };

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.window_title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is bound to Back; quit through the action instead
    rl.set_exit_key(None);

    let texture = match rl.load_texture(&thread, &cli.texture.to_string_lossy()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error loading {}: {e}", cli.texture.display());
            std::process::exit(1);
        }
    };
    let mut textures = TextureStore::new();
    textures.insert(TEXTURE_KEY, texture);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputManager::new(&rl, config.gamepad_axis_threshold));
    world.insert_resource(InputBindings::default());
    world.insert_resource(Reversed::default());

    let mut sprite = match atlas.create_animated_sprite("forward") {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error creating sprite: {e}");
            std::process::exit(1);
        }
    };
    sprite.attributes.scale = Vector2 { x: 4.0, y: 4.0 };
    if let Err(e) = sprite.center_origin(&atlas) {
        log::warn!("{}", e);
    }
    world.spawn((
        sprite,
        MapPosition::new(
            config.window_width as f32 * 0.5,
            config.window_height as f32 * 0.5,
        ),
    ));

    world.insert_resource(atlas);
    world.insert_resource(config);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);

    world.add_observer(log_input_event);
    world.add_observer(swap_animation_observer);
    world.add_observer(toggle_debug_mode);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(emit_input_events.after(update_input_state));
    update.add_systems(move_sprites.after(update_input_state));
    update.add_systems(animation);

    // --------------- Main loop ---------------
    loop {
        let (dt, should_close) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_frame_time(), rl.window_should_close())
        };
        if should_close {
            break;
        }
        update_world_time(&mut world, dt);

        update.run(&mut world);

        let quit = world
            .resource::<InputBindings>()
            .action_just_activated(world.resource::<InputManager>(), InputAction::Back);
        if quit {
            break;
        }

        let Some(mut rl) = world.remove_non_send_resource::<raylib::RaylibHandle>() else {
            break;
        };
        {
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::RAYWHITE);
            render_sprites(&mut world, &mut d);
            d.draw_fps(10, 10);
        }
        world.insert_non_send_resource(rl);

        world.clear_trackers();
    }
    log::info!("Bye");
}
