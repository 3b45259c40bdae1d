//! Raylib implementation of [`RenderBackend`].
//!
//! Textures live in a slot map keyed by [`TextureId`]. Draw calls go through
//! raylib's C API directly, so they work inside whatever drawing scope the
//! caller has opened (`begin_drawing`, `begin_mode2D`, ...).
//!
//! Must be created after the window (it needs a GL context) and dropped
//! before it.

use std::cell::{Cell, RefCell};

use log::{debug, warn};
use raylib::ffi;
use rustc_hash::FxHashMap;

use crate::renderer::backend::{Rect, RenderBackend, TexCoords};
use crate::renderer::image::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(u32);

enum Slot {
    Plain(ffi::Texture2D),
    Target(ffi::RenderTexture2D),
}

impl Slot {
    fn texture(&self) -> ffi::Texture2D {
        match self {
            Slot::Plain(texture) => *texture,
            Slot::Target(target) => target.texture,
        }
    }

    fn unload(self) {
        unsafe {
            match self {
                Slot::Plain(texture) => ffi::UnloadTexture(texture),
                Slot::Target(target) => ffi::UnloadRenderTexture(target),
            }
        }
    }
}

const WHITE: ffi::Color = ffi::Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

#[derive(Default)]
pub struct RaylibBackend {
    slots: RefCell<FxHashMap<TextureId, Slot>>,
    next_id: Cell<u32>,
    target: Cell<Option<TextureId>>,
}

impl RaylibBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_textures(&self) -> usize {
        self.slots.borrow().len()
    }

    fn register(&self, slot: Slot) -> TextureId {
        let id = TextureId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        self.slots.borrow_mut().insert(id, slot);
        id
    }
}

impl RenderBackend for RaylibBackend {
    type Handle = TextureId;

    fn create_texture(&self, image: &Image) -> TextureId {
        let mut pixels = image.to_rgba8();
        let raw = ffi::Image {
            data: pixels.as_mut_ptr() as *mut std::ffi::c_void,
            width: image.width() as i32,
            height: image.height() as i32,
            mipmaps: 1,
            format: ffi::PixelFormat::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 as i32,
        };
        // The pixel buffer is copied to the GPU; `pixels` stays owned by us.
        let texture = unsafe { ffi::LoadTextureFromImage(raw) };
        if texture.id == 0 {
            warn!(
                "Failed to upload {}x{} texture",
                image.width(),
                image.height()
            );
        }
        self.register(Slot::Plain(texture))
    }

    fn create_render_target_texture(&self, width: i32, height: i32) -> TextureId {
        let target = unsafe { ffi::LoadRenderTexture(width, height) };
        if target.id == 0 {
            warn!("Failed to create {}x{} render target", width, height);
        }
        self.register(Slot::Target(target))
    }

    fn destroy_texture(&self, handle: TextureId) {
        if self.target.get() == Some(handle) {
            self.set_render_target(None);
        }
        match self.slots.borrow_mut().remove(&handle) {
            Some(slot) => slot.unload(),
            None => warn!("destroy_texture: unknown handle {:?}", handle),
        }
    }

    fn draw_texture(&self, handle: TextureId, source: TexCoords, dest: Rect) {
        let slots = self.slots.borrow();
        let Some(slot) = slots.get(&handle) else {
            return;
        };
        let texture = slot.texture();
        let w = texture.width as f32;
        let h = texture.height as f32;
        let mut src = ffi::Rectangle {
            x: source.left * w,
            y: source.top * h,
            width: (source.right - source.left) * w,
            height: (source.bottom - source.top) * h,
        };
        if matches!(slot, Slot::Target(_)) {
            // Render textures are stored upside down
            src.height = -src.height;
        }
        let dst = ffi::Rectangle {
            x: dest.x as f32,
            y: dest.y as f32,
            width: dest.width as f32,
            height: dest.height as f32,
        };
        unsafe {
            ffi::DrawTexturePro(texture, src, dst, ffi::Vector2 { x: 0.0, y: 0.0 }, 0.0, WHITE);
        }
    }

    fn set_render_target(&self, target: Option<TextureId>) {
        if self.target.get().is_some() {
            unsafe { ffi::EndTextureMode() };
        }
        self.target.set(None);

        let Some(id) = target else {
            return;
        };
        match self.slots.borrow().get(&id) {
            Some(Slot::Target(render_texture)) => {
                unsafe { ffi::BeginTextureMode(*render_texture) };
                self.target.set(Some(id));
            }
            _ => warn!("set_render_target: {:?} is not a render target", id),
        }
    }

    fn render_target(&self) -> Option<TextureId> {
        self.target.get()
    }
}

impl Drop for RaylibBackend {
    fn drop(&mut self) {
        let leftovers: Vec<Slot> = self.slots.get_mut().drain().map(|(_, slot)| slot).collect();
        if !leftovers.is_empty() {
            debug!("Unloading {} leaked texture(s)", leftovers.len());
        }
        for slot in leftovers {
            slot.unload();
        }
    }
}
