//! Simulation clock resource.
use std::time::Duration;

use bevy_ecs::prelude::Resource;

/// Frame timing shared by all systems.
///
/// Durations keep animation timing exact; frame times from raylib are
/// converted once in [`update_world_time`](crate::systems::time::update_world_time).
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Total scaled time since startup.
    pub elapsed: Duration,
    /// Scaled time of the current frame.
    pub delta: Duration,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: Duration::ZERO,
            delta: Duration::ZERO,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
