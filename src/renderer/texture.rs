//! Owned GPU textures.
//!
//! A [`Texture`] exclusively owns one backend handle. It is created from a
//! decoded [`Image`] (or, as a [`RenderTargetTexture`], directly at a given
//! size) and releases the handle in `Drop`, exactly once. Moving a texture
//! transfers ownership; the moved-from binding is never dropped, so no
//! second release can happen.
//!
//! Textures keep an `Rc` to their backend. That makes them `!Send`: they are
//! created, drawn and destroyed on the thread that owns the graphics context.
//!
//! There is no resize: to change dimensions, build a new texture and drop the
//! old one.

use std::ops::Deref;
use std::rc::Rc;

use crate::renderer::backend::{Point, Rect, RenderBackend, TexCoords, to_tex_coords};
use crate::renderer::image::Image;

pub struct Texture<B: RenderBackend> {
    backend: Rc<B>,
    id: B::Handle,
    width: i32,
    height: i32,
}

impl<B: RenderBackend> Texture<B> {
    /// Upload `image` and take ownership of the new backend texture.
    pub fn new(backend: &Rc<B>, image: &Image) -> Self {
        let id = backend.create_texture(image);
        Self::from_handle(backend, id, image.width() as i32, image.height() as i32)
    }

    fn from_handle(backend: &Rc<B>, id: B::Handle, width: i32, height: i32) -> Self {
        Self {
            backend: Rc::clone(backend),
            id,
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn id(&self) -> B::Handle {
        self.id
    }

    /// Draw the whole texture with its top-left corner at `(x, y)`.
    pub fn render(&self, x: i32, y: i32) {
        let full = Rect::new(0, 0, self.width, self.height);
        self.render_part(x, y, &full);
    }

    pub fn render_at(&self, position: Point) {
        self.render(position.x, position.y);
    }

    /// Draw the `source` part of the texture, unscaled, at `(x, y)`.
    pub fn render_part(&self, x: i32, y: i32, source: &Rect) {
        let dest = Rect::new(x, y, source.width, source.height);
        self.backend.draw_texture(
            self.id,
            to_tex_coords(source, self.width, self.height),
            dest,
        );
    }

    pub fn render_part_at(&self, position: Point, source: &Rect) {
        self.render_part(position.x, position.y, source);
    }

    /// Stretch the whole texture over `dest`.
    pub fn render_scaled(&self, dest: &Rect) {
        self.backend.draw_texture(self.id, TexCoords::FULL, *dest);
    }
}

impl<B: RenderBackend> Drop for Texture<B> {
    fn drop(&mut self) {
        self.backend.destroy_texture(self.id);
    }
}

impl<B: RenderBackend> std::fmt::Debug for Texture<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Texture that can be drawn into.
///
/// Derefs to [`Texture`], so it can be blitted like any other texture once
/// its contents are ready.
#[derive(Debug)]
pub struct RenderTargetTexture<B: RenderBackend> {
    texture: Texture<B>,
}

impl<B: RenderBackend> RenderTargetTexture<B> {
    pub fn new(backend: &Rc<B>, width: i32, height: i32) -> Self {
        let id = backend.create_render_target_texture(width, height);
        Self {
            texture: Texture::from_handle(backend, id, width, height),
        }
    }

    /// Send draw calls into this texture until the returned guard is
    /// dropped; the previous target is restored afterwards.
    pub fn bind(&self) -> RenderTargetBinder<'_, B> {
        let backend = &self.texture.backend;
        let previous = backend.render_target();
        backend.set_render_target(Some(self.texture.id));
        RenderTargetBinder {
            backend: backend.as_ref(),
            previous,
        }
    }
}

impl<B: RenderBackend> Deref for RenderTargetTexture<B> {
    type Target = Texture<B>;

    fn deref(&self) -> &Texture<B> {
        &self.texture
    }
}

/// Scope guard returned by [`RenderTargetTexture::bind`].
#[must_use = "the render target is unbound as soon as the binder is dropped"]
pub struct RenderTargetBinder<'a, B: RenderBackend> {
    backend: &'a B,
    previous: Option<B::Handle>,
}

impl<B: RenderBackend> Drop for RenderTargetBinder<'_, B> {
    fn drop(&mut self) {
        self.backend.set_render_target(self.previous);
    }
}
