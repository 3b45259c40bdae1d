//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – frame-stepped sprite animation
//! - [`boxcollider`] – integer axis-aligned collider and the [`boxcollider::Aabb`] type
//! - [`damaging`] – marker for entities that hurt the player on contact
//! - [`extendedframes`] – extra sprite layers stacked above the base sprite
//! - [`mapposition`] – integer world-space position
//! - [`solid`] – marker for bodies that block movement
//! - [`sprite`] – 2D sprite sheet reference and current frame
//! - [`ttl`] – frame countdown that despawns the entity
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod damaging;
pub mod extendedframes;
pub mod mapposition;
pub mod solid;
pub mod sprite;
pub mod ttl;
pub mod zindex;
