//! Render target resource for fixed-resolution rendering.
//!
//! Provides a framebuffer texture at the game's internal resolution, which is
//! then scaled to fit the actual window size with letterboxing.

use std::rc::Rc;

use log::info;

use crate::renderer::backend::{Rect, RenderBackend};
use crate::renderer::texture::RenderTargetTexture;

/// Render target for fixed-resolution rendering with scaling.
///
/// Non-send resource: the texture belongs to the graphics thread.
pub struct RenderTarget<B: RenderBackend> {
    pub texture: RenderTargetTexture<B>,
    /// Game's internal render width in pixels.
    pub game_width: u32,
    /// Game's internal render height in pixels.
    pub game_height: u32,
}

impl<B: RenderBackend> RenderTarget<B> {
    /// Create a new render target at the specified game resolution.
    pub fn new(backend: &Rc<B>, width: u32, height: u32) -> Self {
        Self {
            texture: RenderTargetTexture::new(backend, width as i32, height as i32),
            game_width: width,
            game_height: height,
        }
    }

    /// Switch to a new resolution.
    ///
    /// Textures cannot be resized: a new target is created and the old one is
    /// released when it is replaced.
    pub fn recreate(&mut self, backend: &Rc<B>, width: u32, height: u32) {
        if width == self.game_width && height == self.game_height {
            return;
        }
        info!(
            "Recreating render target: {}x{} -> {}x{}",
            self.game_width, self.game_height, width, height
        );
        *self = Self::new(backend, width, height);
    }

    /// Largest destination rectangle with the game's aspect ratio that fits
    /// a `window_width` x `window_height` window, centered.
    pub fn letterbox(&self, window_width: i32, window_height: i32) -> Rect {
        let scale = (window_width as f32 / self.game_width.max(1) as f32)
            .min(window_height as f32 / self.game_height.max(1) as f32);
        let width = (self.game_width as f32 * scale) as i32;
        let height = (self.game_height as f32 * scale) as i32;
        Rect::new(
            (window_width - width) / 2,
            (window_height - height) / 2,
            width,
            height,
        )
    }

    /// Stretch the finished frame into the window.
    pub fn present(&self, window_width: i32, window_height: i32) {
        self.texture
            .render_scaled(&self.letterbox(window_width, window_height));
    }
}
