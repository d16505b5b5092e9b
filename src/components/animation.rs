use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Per-entity playback of an animation held in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
///
/// Several players may share one stored animation; each keeps its own start
/// tick, so the stored animation's clock is never touched.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct AnimationPlayer {
    pub animation_key: String,
    /// Tick playback began at. `None` until the animation system first sees
    /// this player, which then begins it at the current world tick.
    pub start_tick: Option<i64>,
    pub frame_index: usize,
}

impl AnimationPlayer {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            start_tick: None,
            frame_index: 0,
        }
    }

    /// Player that began at `tick` rather than on its first update.
    pub fn starting_at(animation_key: impl Into<String>, tick: i64) -> Self {
        Self {
            start_tick: Some(tick),
            ..Self::new(animation_key)
        }
    }

    /// Begin again on the next update.
    pub fn restart(&mut self) {
        self.start_tick = None;
        self.frame_index = 0;
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_tick.is_some()
    }
}
