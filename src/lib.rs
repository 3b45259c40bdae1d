//! Hazard engine library.
//!
//! Frame-stepped entity behaviors on top of bevy_ecs: state-machine actors,
//! collision-aware movement, a side-effect gateway for sounds and spawns, and
//! owned GPU textures.

pub mod behaviors;
pub mod components;
pub mod events;
pub mod game;
pub mod renderer;
pub mod resources;
pub mod systems;
