use std::sync::Arc;

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::animation::{Animation, AnimationPlayer};
use crate::error::{AnimationError, AtlasError};
use crate::resources::atlas::{RegionId, TextureAtlas};

/// How a sprite is painted, independent of which region it shows.
///
/// The origin is the pivot in unscaled region pixels relative to the region's
/// top-left; it is the point placed at the entity's position and the center of
/// rotation and scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteAttributes {
    pub tint: Color,
    /// Clockwise rotation in degrees.
    pub rotation: f32,
    pub scale: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
    pub flip_v: bool,
    /// Draw order; lower depths are drawn first.
    pub layer_depth: f32,
}

impl Default for SpriteAttributes {
    fn default() -> Self {
        Self {
            tint: Color::WHITE,
            rotation: 0.0,
            scale: Vector2 { x: 1.0, y: 1.0 },
            origin: Vector2 { x: 0.0, y: 0.0 },
            flip_h: false,
            flip_v: false,
            layer_depth: 0.0,
        }
    }
}

/// Where the displayed region comes from.
#[derive(Clone, Debug)]
pub enum SpriteSource {
    Static(RegionId),
    Animated(AnimationPlayer),
}

/// A drawable sub-region of the atlas texture.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub attributes: SpriteAttributes,
    pub source: SpriteSource,
}

/// Everything needed for one `draw_texture_pro` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteDraw {
    /// Source rectangle; negative width/height mirrors the image.
    pub source: Rectangle,
    pub dest: Rectangle,
    /// Pivot relative to `dest`, already scaled.
    pub origin: Vector2,
    pub rotation: f32,
    pub tint: Color,
    pub layer_depth: f32,
}

impl Sprite {
    pub fn new_static(region: RegionId) -> Self {
        Self {
            attributes: SpriteAttributes::default(),
            source: SpriteSource::Static(region),
        }
    }

    pub fn new_animated(animation: Arc<Animation>) -> Result<Self, AnimationError> {
        Ok(Self {
            attributes: SpriteAttributes::default(),
            source: SpriteSource::Animated(AnimationPlayer::new(animation)?),
        })
    }

    pub fn with_attributes(mut self, attributes: SpriteAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Region shown this frame.
    pub fn current_region(&self) -> RegionId {
        match &self.source {
            SpriteSource::Static(region) => *region,
            SpriteSource::Animated(player) => player.current_region(),
        }
    }

    pub fn player(&self) -> Option<&AnimationPlayer> {
        match &self.source {
            SpriteSource::Animated(player) => Some(player),
            SpriteSource::Static(_) => None,
        }
    }

    pub fn player_mut(&mut self) -> Option<&mut AnimationPlayer> {
        match &mut self.source {
            SpriteSource::Animated(player) => Some(player),
            SpriteSource::Static(_) => None,
        }
    }

    /// Play `animation` from its first frame. A static sprite becomes
    /// animated. On error the sprite is left as it was.
    pub fn set_animation(&mut self, animation: Arc<Animation>) -> Result<(), AnimationError> {
        match &mut self.source {
            SpriteSource::Animated(player) => player.set_animation(animation),
            SpriteSource::Static(_) => {
                self.source = SpriteSource::Animated(AnimationPlayer::new(animation)?);
                Ok(())
            }
        }
    }

    /// Scaled width of the current region.
    pub fn width(&self, atlas: &TextureAtlas) -> Result<f32, AtlasError> {
        let region = atlas.region_geometry(self.current_region())?;
        Ok(region.width as f32 * self.attributes.scale.x)
    }

    /// Scaled height of the current region.
    pub fn height(&self, atlas: &TextureAtlas) -> Result<f32, AtlasError> {
        let region = atlas.region_geometry(self.current_region())?;
        Ok(region.height as f32 * self.attributes.scale.y)
    }

    /// Put the origin at the center of the current region.
    pub fn center_origin(&mut self, atlas: &TextureAtlas) -> Result<(), AtlasError> {
        let region = atlas.region_geometry(self.current_region())?;
        self.attributes.origin = Vector2 {
            x: region.width as f32 * 0.5,
            y: region.height as f32 * 0.5,
        };
        Ok(())
    }

    /// Resolve the current region and compute draw parameters with the
    /// origin placed at `position`.
    pub fn draw_params(
        &self,
        atlas: &TextureAtlas,
        position: Vector2,
    ) -> Result<SpriteDraw, AtlasError> {
        let region = atlas.region_geometry(self.current_region())?;
        let a = &self.attributes;

        let mut source = region.to_rectangle();
        if a.flip_h {
            source.width = -source.width;
        }
        if a.flip_v {
            source.height = -source.height;
        }

        Ok(SpriteDraw {
            source,
            dest: Rectangle {
                x: position.x,
                y: position.y,
                width: region.width as f32 * a.scale.x,
                height: region.height as f32 * a.scale.y,
            },
            origin: Vector2 {
                x: a.origin.x * a.scale.x,
                y: a.origin.y * a.scale.y,
            },
            rotation: a.rotation,
            tint: a.tint,
            layer_depth: a.layer_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn atlas() -> TextureAtlas {
        let mut atlas = TextureAtlas::new("atlas");
        atlas.add_region("a", 0, 0, 32, 16).unwrap();
        atlas.add_region("b", 32, 0, 32, 16).unwrap();
        atlas
            .add_animation_from_regions("ab", &["a", "b"], Duration::from_millis(100))
            .unwrap();
        atlas
    }

    #[test]
    fn test_default_attributes() {
        let a = SpriteAttributes::default();
        assert_eq!(a.tint.r, 255);
        assert_eq!(a.tint.a, 255);
        assert_eq!(a.rotation, 0.0);
        assert_eq!(a.scale.x, 1.0);
        assert_eq!(a.scale.y, 1.0);
        assert_eq!(a.origin.x, 0.0);
        assert!(!a.flip_h && !a.flip_v);
        assert_eq!(a.layer_depth, 0.0);
    }

    #[test]
    fn test_size_follows_scale() {
        let atlas = atlas();
        let mut s = atlas.create_sprite("a").unwrap();
        s.attributes.scale = Vector2 { x: 2.0, y: 0.5 };
        assert_eq!(s.width(&atlas).unwrap(), 64.0);
        assert_eq!(s.height(&atlas).unwrap(), 8.0);
    }

    #[test]
    fn test_center_origin() {
        let atlas = atlas();
        let mut s = atlas.create_sprite("a").unwrap();
        s.center_origin(&atlas).unwrap();
        assert_eq!(s.attributes.origin.x, 16.0);
        assert_eq!(s.attributes.origin.y, 8.0);
    }

    #[test]
    fn test_draw_params_plain() {
        let atlas = atlas();
        let s = atlas.create_sprite("b").unwrap();
        let d = s.draw_params(&atlas, Vector2 { x: 5.0, y: 6.0 }).unwrap();
        assert_eq!(d.source.x, 32.0);
        assert_eq!(d.source.width, 32.0);
        assert_eq!(d.dest.x, 5.0);
        assert_eq!(d.dest.y, 6.0);
        assert_eq!(d.dest.width, 32.0);
        assert_eq!(d.dest.height, 16.0);
    }

    #[test]
    fn test_draw_params_flip_scale_origin() {
        let atlas = atlas();
        let mut s = atlas.create_sprite("a").unwrap();
        s.attributes.flip_h = true;
        s.attributes.flip_v = true;
        s.attributes.scale = Vector2 { x: 3.0, y: 2.0 };
        s.attributes.origin = Vector2 { x: 4.0, y: 4.0 };
        s.attributes.rotation = 90.0;
        let d = s.draw_params(&atlas, Vector2 { x: 0.0, y: 0.0 }).unwrap();
        assert_eq!(d.source.width, -32.0);
        assert_eq!(d.source.height, -16.0);
        assert_eq!(d.dest.width, 96.0);
        assert_eq!(d.dest.height, 32.0);
        assert_eq!(d.origin.x, 12.0);
        assert_eq!(d.origin.y, 8.0);
        assert_eq!(d.rotation, 90.0);
    }

    #[test]
    fn test_animated_sprite_follows_player() {
        let atlas = atlas();
        let mut s = atlas.create_animated_sprite("ab").unwrap();
        assert_eq!(s.current_region(), atlas.region("a").unwrap());
        s.player_mut().unwrap().advance(Duration::from_millis(100));
        assert_eq!(s.current_region(), atlas.region("b").unwrap());
        let d = s.draw_params(&atlas, Vector2 { x: 0.0, y: 0.0 }).unwrap();
        assert_eq!(d.source.x, 32.0);
    }

    #[test]
    fn test_static_sprite_has_no_player() {
        let atlas = atlas();
        let mut s = atlas.create_sprite("a").unwrap();
        assert!(s.player().is_none());
        assert!(s.player_mut().is_none());
    }

    #[test]
    fn test_set_animation_on_static_sprite() {
        let atlas = atlas();
        let mut s = atlas.create_sprite("b").unwrap();
        s.set_animation(atlas.animation("ab").unwrap()).unwrap();
        assert_eq!(s.player().unwrap().frame_index(), 0);
        assert_eq!(s.current_region(), atlas.region("a").unwrap());
    }

    #[test]
    fn test_failed_set_animation_keeps_static_sprite() {
        let atlas = atlas();
        let mut s = atlas.create_sprite("b").unwrap();
        let err = s.set_animation(Arc::new(Animation::default())).unwrap_err();
        assert_eq!(err, AnimationError::NoFrames);
        assert!(s.player().is_none());
        assert_eq!(s.current_region(), atlas.region("b").unwrap());
    }

    #[test]
    fn test_removed_region_fails_to_draw() {
        let mut atlas = atlas();
        let s = atlas.create_sprite("a").unwrap();
        atlas.remove_region("a").unwrap();
        assert!(matches!(
            s.draw_params(&atlas, Vector2 { x: 0.0, y: 0.0 }),
            Err(AtlasError::StaleRegion(_))
        ));
    }
}
