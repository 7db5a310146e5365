//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use std::time::Duration;

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds, as returned by
/// raylib. Negative or non-finite values count as no time passing.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled = Duration::try_from_secs_f32(dt * wt.time_scale).unwrap_or(Duration::ZERO);
    wt.elapsed += scaled;
    wt.delta = scaled;
    wt.frame_count += 1;
}
