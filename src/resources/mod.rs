//! ECS resources made available to systems.
//!
//! Overview
//! - `actorcatalog` – archetypes of spawnable one-shot effects
//! - `audio` – bridge and channels for the background audio thread
//! - `collision` – collision checker trait, tile map and frame snapshot
//! - `gameconfig` – INI-backed settings
//! - `rendertarget` – fixed-resolution render target (non-send)
//! - `scenelayout` – text-grid scene description loaded from JSON
//! - `texturestore` – loaded textures keyed by string IDs (non-send)
//! - `viewport` – visible world rectangle
//! - `worldtime` – frame counter and derived time
pub mod actorcatalog;
pub mod audio;
pub mod collision;
pub mod gameconfig;
pub mod rendertarget;
pub mod scenelayout;
pub mod texturestore;
pub mod viewport;
pub mod worldtime;
