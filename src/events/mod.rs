//! Event types used by the engine.
//!
//! Messages provide a decoupled way for systems to communicate without
//! direct dependencies.
//!
//! Submodules:
//! - [`audio`] – sound identifiers, commands and messages for the background audio thread
pub mod audio;
