use bevy_ecs::prelude::Component;

/// Sprite is identified by a texture key and the size of one frame in pixels.
/// Frames are laid out left to right in the texture; `frame` selects the one
/// drawn at the entity position.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: String,
    pub frame_width: i32,
    pub frame_height: i32,
    pub frame: i32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, frame_width: i32, frame_height: i32) -> Self {
        Self {
            tex_key: tex_key.into(),
            frame_width,
            frame_height,
            frame: 0,
        }
    }

    pub fn with_frame(mut self, frame: i32) -> Self {
        self.frame = frame;
        self
    }
}
