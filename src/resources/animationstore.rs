//! Animation resource registry.
//!
//! Decoded animations are loaded once and stored here under a string key.
//! [`AnimationPlayer`](crate::components::animation::AnimationPlayer)
//! components refer to them by key, and the animation system reads them to
//! pick each player's frame.

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;

use crate::animation::Animation;

/// Central registry of decoded animations keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, Animation>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `animation` under `key`, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, animation: Animation) -> Option<Animation> {
        let key = key.into();
        debug!(
            "Storing animation '{}' ({} frames)",
            key,
            animation.frame_count()
        );
        self.animations.insert(key, animation)
    }

    pub fn get(&self, key: &str) -> Option<&Animation> {
        self.animations.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Animation> {
        self.animations.get_mut(key)
    }

    /// Release the animation stored under `key`.
    ///
    /// Returns the number of frames released.
    pub fn unload(&mut self, key: &str) -> usize {
        let mut handle = self.animations.remove(key);
        Animation::destroy(&mut handle)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
