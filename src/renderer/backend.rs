//! Rendering backend contract.
//!
//! A backend hands out opaque texture handles and draws them. Texture
//! wrappers in [`crate::renderer::texture`] own those handles and release
//! them exactly once; the backend never has to guard against double frees.
//!
//! Methods take `&self`: backends are used from the thread that owns the
//! graphics context only, and keep any bookkeeping in interior-mutable
//! state.

use crate::renderer::image::Image;

/// Integer rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Normalized source coordinates, `0.0..=1.0` across the texture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TexCoords {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TexCoords {
    /// The whole texture.
    pub const FULL: TexCoords = TexCoords {
        left: 0.0,
        top: 0.0,
        right: 1.0,
        bottom: 1.0,
    };
}

/// Convert a pixel rectangle of a `width` x `height` texture into
/// normalized coordinates.
pub fn to_tex_coords(source: &Rect, width: i32, height: i32) -> TexCoords {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    TexCoords {
        left: source.x as f32 / w,
        top: source.y as f32 / h,
        right: (source.x + source.width) as f32 / w,
        bottom: (source.y + source.height) as f32 / h,
    }
}

pub trait RenderBackend {
    type Handle: Copy + Eq + std::fmt::Debug;

    fn create_texture(&self, image: &Image) -> Self::Handle;

    fn create_render_target_texture(&self, width: i32, height: i32) -> Self::Handle;

    fn destroy_texture(&self, handle: Self::Handle);

    fn draw_texture(&self, handle: Self::Handle, source: TexCoords, dest: Rect);

    /// Redirect drawing into `target`, or back to the screen for `None`.
    fn set_render_target(&self, target: Option<Self::Handle>);

    /// Target currently receiving draw calls; `None` is the screen.
    fn render_target(&self) -> Option<Self::Handle>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_rect_maps_to_unit_square() {
        let coords = to_tex_coords(&Rect::new(0, 0, 64, 32), 64, 32);
        assert_eq!(coords, TexCoords::FULL);
    }

    #[test]
    fn test_sub_rect_coords() {
        let coords = to_tex_coords(&Rect::new(16, 8, 16, 8), 64, 32);
        assert_eq!(
            coords,
            TexCoords {
                left: 0.25,
                top: 0.25,
                right: 0.5,
                bottom: 0.5
            }
        );
    }
}
