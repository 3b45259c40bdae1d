use bevy_ecs::prelude::Component;

/// Frame-stepped sprite animation over the range `first..=last`.
///
/// The animation advances one frame every `delay_frames + 1` ticks. A
/// non-looping animation stops on `last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Animation {
    pub first: i32,
    pub last: i32,
    pub delay_frames: u32,
    pub looped: bool,
    pub current: i32,
    pub ticks_in_frame: u32,
}

impl Animation {
    pub fn once(first: i32, last: i32) -> Self {
        Self {
            first,
            last,
            delay_frames: 0,
            looped: false,
            current: first,
            ticks_in_frame: 0,
        }
    }

    pub fn looping(first: i32, last: i32) -> Self {
        Self {
            looped: true,
            ..Self::once(first, last)
        }
    }

    pub fn with_delay(mut self, delay_frames: u32) -> Self {
        self.delay_frames = delay_frames;
        self
    }

    /// Number of distinct frames in the animation.
    pub fn frame_count(&self) -> u32 {
        (self.last - self.first + 1).max(1) as u32
    }

    pub fn finished(&self) -> bool {
        !self.looped && self.current == self.last
    }

    /// Advance by one tick. Returns `true` when the visible frame changed.
    pub fn step(&mut self) -> bool {
        if self.finished() {
            return false;
        }
        if self.ticks_in_frame < self.delay_frames {
            self.ticks_in_frame += 1;
            return false;
        }
        self.ticks_in_frame = 0;
        if self.current >= self.last {
            self.current = self.first;
        } else {
            self.current += 1;
        }
        true
    }
}
