//! Sprite rendering.
//!
//! [`render_pass`] draws every visible [`Sprite`] through the textures in the
//! non-send [`TextureStore`]. Positions are converted from world units to
//! pixels with [`GameConfig::unit_size`], relative to the [`Viewport`].
//! Entities with an [`ExtendedFrameList`] get their extra layers drawn first,
//! stacked above the base sprite, which is drawn last so it covers the seam.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::Aabb;
use crate::components::extendedframes::ExtendedFrameList;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::renderer::backend::{Rect, RenderBackend};
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;
use crate::resources::viewport::Viewport;

/// Source rectangle of `frame` in a horizontal strip of `sprite` frames.
pub fn frame_rect(sprite: &Sprite, frame: i32) -> Rect {
    Rect::new(
        frame * sprite.frame_width,
        0,
        sprite.frame_width,
        sprite.frame_height,
    )
}

/// Draw all visible sprites into the currently bound render target.
///
/// Returns the number of draw calls issued.
pub fn render_pass<B: RenderBackend + 'static>(world: &mut World) -> usize {
    let unit = world
        .get_resource::<GameConfig>()
        .map(|config| config.unit_size as i32)
        .unwrap_or(8)
        .max(1);
    let viewport = world.get_resource::<Viewport>().copied().unwrap_or_default();
    let view = viewport.bounds();

    let mut to_draw: Vec<(ZIndex, MapPosition, Sprite, Option<ExtendedFrameList>)> = {
        let mut query = world.query::<(
            &Sprite,
            &MapPosition,
            Option<&ZIndex>,
            Option<&ExtendedFrameList>,
        )>();
        query
            .iter(world)
            .filter(|(sprite, position, _, frames)| {
                let stack = frames.map(|f| f.len() as i32).unwrap_or(0);
                let width_units = (sprite.frame_width + unit - 1) / unit;
                let height_units = (sprite.frame_height + unit - 1) / unit;
                let bounds = Aabb::new(
                    position.x,
                    position.y - stack,
                    width_units.max(1),
                    height_units.max(1) + stack,
                );
                view.intersects(&bounds)
            })
            .map(|(sprite, position, z, frames)| {
                (
                    z.copied().unwrap_or_default(),
                    *position,
                    sprite.clone(),
                    frames.cloned(),
                )
            })
            .collect()
    };
    to_draw.sort_by_key(|(z, ..)| *z);

    let Some(textures) = world.get_non_send_resource::<TextureStore<B>>() else {
        debug!("render_pass: no texture store");
        return 0;
    };

    let mut draw_calls = 0;
    for (_, position, sprite, frames) in &to_draw {
        let Some(texture) = textures.get(&sprite.tex_key) else {
            debug!("render_pass: missing texture '{}'", sprite.tex_key);
            continue;
        };
        let px = (position.x - viewport.x) * unit;
        let py = (position.y - viewport.y) * unit;

        if let Some(frames) = frames {
            for extra in &frames.frames {
                texture.render_part(
                    px + extra.offset_x * unit,
                    py + (extra.offset_y - 1) * unit,
                    &frame_rect(sprite, extra.frame),
                );
                draw_calls += 1;
            }
        }
        texture.render_part(px, py, &frame_rect(sprite, sprite.frame));
        draw_calls += 1;
    }
    draw_calls
}
