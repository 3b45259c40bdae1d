//! Animation system.
//!
//! [`animation_system`] advances every [`Animation`] by one tick and copies
//! the current frame into the entity's [`Sprite`].

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;

pub fn animation_system(mut query: Query<(&mut Animation, &mut Sprite)>) {
    for (mut animation, mut sprite) in query.iter_mut() {
        if animation.step() {
            sprite.frame = animation.current;
        }
    }
}
