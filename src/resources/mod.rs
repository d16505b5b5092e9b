//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – decoded animations keyed by string IDs
//! - `playerconfig` – which animation to load and which ticks to play
//! - `worldticks` – shared playback clock
pub mod animationstore;
pub mod playerconfig;
pub mod worldticks;
