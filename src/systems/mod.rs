//! Playback systems.
//!
//! Submodules overview
//! - [`animation`] – pick the visible frame of every animation player
//! - [`time`] – move the shared tick clock

pub mod animation;
pub mod time;
