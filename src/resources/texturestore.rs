//! Loaded textures keyed by string ids.
//!
//! Holds [`Texture`]s, which are `!Send`, so the store is inserted as a
//! non-send resource. Removing or replacing an entry releases the old
//! texture immediately.

use rustc_hash::FxHashMap;

use crate::renderer::backend::RenderBackend;
use crate::renderer::texture::Texture;

pub struct TextureStore<B: RenderBackend> {
    pub map: FxHashMap<String, Texture<B>>,
}

impl<B: RenderBackend> Default for TextureStore<B> {
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

impl<B: RenderBackend> TextureStore<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `texture` under `key`, returning the previous one if any.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture<B>) -> Option<Texture<B>> {
        self.map.insert(key.into(), texture)
    }

    pub fn get(&self, key: &str) -> Option<&Texture<B>> {
        self.map.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Texture<B>> {
        self.map.remove(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
