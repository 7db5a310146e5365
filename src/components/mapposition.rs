use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an entity. A sprite's origin is drawn here.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
