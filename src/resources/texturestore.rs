//! Texture store resource.
//!
//! A non-send resource owning every loaded texture, keyed by string IDs.
//! [`TextureAtlas`](crate::resources::atlas::TextureAtlas) refers to its
//! texture by key only.
//!
//! Note: raylib textures must be used from the main thread only.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.textures.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(key.as_ref())
    }
}
