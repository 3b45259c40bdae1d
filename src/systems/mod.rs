//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations
//! - [`audio`] – audio thread and message forwarding
//! - [`behavior`] – run every entity behavior once per frame
//! - [`movement`] – collision-aware movement resolver used by behaviors
//! - [`render`] – draw sprites through the texture store
//! - [`ttl`] – despawn expired one-shot entities

pub mod animation;
pub mod audio;
pub mod behavior;
pub mod movement;
pub mod render;
pub mod ttl;
