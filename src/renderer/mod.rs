//! GPU image resources and rendering backends.
//!
//! - [`backend`] – the [`RenderBackend`](backend::RenderBackend) contract and geometry types
//! - [`image`] – decoded RGBA pixel images
//! - [`texture`] – owned textures and render targets with scope-based release
//! - [`raylib_backend`] – raylib implementation (feature `raylib`)

pub mod backend;
pub mod image;
#[cfg(feature = "raylib")]
pub mod raylib_backend;
pub mod texture;
