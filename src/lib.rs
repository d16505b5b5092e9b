//! flipbook library.
//!
//! Frame-sequence animations decoded from BMP/PNG files, plus the ECS
//! components, resources and systems that play them on a tick clock.

pub mod animation;
pub mod components;
pub mod playback;
pub mod resources;
pub mod systems;
