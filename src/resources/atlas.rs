//! Texture atlas registry.
//!
//! A [`TextureAtlas`] describes named rectangular regions of one texture and
//! named animations built from those regions. Sprites never hold geometry
//! directly: they keep [`RegionId`] handles and resolve them against the atlas
//! at draw time, so the atlas stays the single owner of region data.
//!
//! The texture itself lives in [`TextureStore`](crate::resources::texturestore::TextureStore)
//! under [`TextureAtlas::texture_key`].
use std::sync::Arc;
use std::time::Duration;

use bevy_ecs::prelude::Resource;
use log::debug;
use raylib::prelude::Rectangle;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::error::AtlasError;

/// Handle to a region inside a [`TextureAtlas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u32);

/// Pixel rectangle within the atlas texture, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TextureRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn to_rectangle(self) -> Rectangle {
        Rectangle {
            x: self.x as f32,
            y: self.y as f32,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct TextureAtlas {
    texture_key: String,
    // Removed regions leave a hole so outstanding ids never alias a new region.
    regions: Vec<Option<TextureRegion>>,
    region_names: FxHashMap<String, RegionId>,
    animations: FxHashMap<String, Arc<Animation>>,
}

impl TextureAtlas {
    pub fn new(texture_key: impl Into<String>) -> Self {
        Self {
            texture_key: texture_key.into(),
            ..Self::default()
        }
    }

    pub fn texture_key(&self) -> &str {
        &self.texture_key
    }

    /// Register a region under `name`.
    pub fn add_region(
        &mut self,
        name: impl Into<String>,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<RegionId, AtlasError> {
        let name = name.into();
        if self.region_names.contains_key(&name) {
            return Err(AtlasError::DuplicateRegion(name));
        }
        let id = RegionId(self.regions.len() as u32);
        self.regions
            .push(Some(TextureRegion::new(x, y, width, height)));
        debug!("Atlas '{}': region '{}' -> {:?}", self.texture_key, name, id);
        self.region_names.insert(name, id);
        Ok(id)
    }

    /// Register `count` equally sized regions laid out left to right starting
    /// at (`x`, `y`), named `prefix_0`, `prefix_1`, ...
    pub fn add_strip(
        &mut self,
        prefix: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        count: usize,
    ) -> Result<Vec<RegionId>, AtlasError> {
        (0..count)
            .map(|i| {
                self.add_region(
                    format!("{prefix}_{i}"),
                    x + width * i as i32,
                    y,
                    width,
                    height,
                )
            })
            .collect()
    }

    pub fn region(&self, name: &str) -> Result<RegionId, AtlasError> {
        self.region_names
            .get(name)
            .copied()
            .ok_or_else(|| AtlasError::RegionNotFound(name.to_string()))
    }

    pub fn region_geometry(&self, id: RegionId) -> Result<&TextureRegion, AtlasError> {
        self.regions
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(AtlasError::StaleRegion(id))
    }

    /// Remove a region. Sprites and animations still pointing at it fail to
    /// resolve from now on.
    pub fn remove_region(&mut self, name: &str) -> Result<(), AtlasError> {
        let id = self
            .region_names
            .remove(name)
            .ok_or_else(|| AtlasError::RegionNotFound(name.to_string()))?;
        self.regions[id.0 as usize] = None;
        Ok(())
    }

    pub fn clear_regions(&mut self) {
        self.region_names.clear();
        self.regions.iter_mut().for_each(|r| *r = None);
    }

    pub fn region_count(&self) -> usize {
        self.region_names.len()
    }

    pub fn add_animation(
        &mut self,
        name: impl Into<String>,
        animation: Animation,
    ) -> Result<Arc<Animation>, AtlasError> {
        let name = name.into();
        if self.animations.contains_key(&name) {
            return Err(AtlasError::DuplicateAnimation(name));
        }
        let animation = Arc::new(animation);
        debug!(
            "Atlas '{}': animation '{}' with {} frames",
            self.texture_key,
            name,
            animation.frame_count()
        );
        self.animations.insert(name, animation.clone());
        Ok(animation)
    }

    /// Build an animation from region names and register it.
    pub fn add_animation_from_regions(
        &mut self,
        name: impl Into<String>,
        region_names: &[&str],
        delay: Duration,
    ) -> Result<Arc<Animation>, AtlasError> {
        let frames = region_names
            .iter()
            .map(|r| self.region(r))
            .collect::<Result<Vec<_>, _>>()?;
        self.add_animation(name, Animation::new(frames, delay))
    }

    pub fn animation(&self, name: &str) -> Result<Arc<Animation>, AtlasError> {
        self.animations
            .get(name)
            .cloned()
            .ok_or_else(|| AtlasError::AnimationNotFound(name.to_string()))
    }

    pub fn remove_animation(&mut self, name: &str) -> Result<Arc<Animation>, AtlasError> {
        self.animations
            .remove(name)
            .ok_or_else(|| AtlasError::AnimationNotFound(name.to_string()))
    }

    /// Static sprite showing the named region.
    pub fn create_sprite(&self, region_name: &str) -> Result<Sprite, AtlasError> {
        Ok(Sprite::new_static(self.region(region_name)?))
    }

    /// Sprite playing the named animation from its first frame.
    pub fn create_animated_sprite(&self, animation_name: &str) -> Result<Sprite, AtlasError> {
        let animation = self.animation(animation_name)?;
        Ok(Sprite::new_animated(animation)?)
    }
}
