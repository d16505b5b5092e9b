//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – per-entity playback state of a stored animation
pub mod animation;
