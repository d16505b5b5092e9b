//! Animation system.
//!
//! [`animation`] selects, for every [`AnimationPlayer`], the frame of its
//! stored animation visible at the current world tick.
//!
//! # Animation Flow
//!
//! 1. Decoded animations live in [`AnimationStore`] under a key
//! 2. Entities carry an [`AnimationPlayer`] pointing to a key
//! 3. [`WorldTicks`] is advanced by the playback loop
//! 4. The `animation` system begins new players at the current tick and
//!    writes each player's `frame_index`
//!
//! # Related
//!
//! - [`crate::animation::Animation`] – frame selection rules
//! - [`crate::resources::animationstore::AnimationStore`] – stored animations

use bevy_ecs::prelude::*;
use log::{trace, warn};

use crate::components::animation::AnimationPlayer;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldticks::WorldTicks;

/// Update the visible frame of every animation player.
///
/// Contract
/// - Reads [`WorldTicks`] for the current tick.
/// - Looks up animations in [`AnimationStore`]; players with an unknown key
///   are left untouched.
/// - A player that has not started begins at the current tick.
/// - A player whose start tick is in the future (the clock was rewound)
///   begins again at the current tick.
/// - Players whose frame did not change are not marked as changed.
pub fn animation(
    mut query: Query<&mut AnimationPlayer>,
    animation_store: Res<AnimationStore>,
    ticks: Res<WorldTicks>,
) {
    let now = ticks.tick;
    for mut player in query.iter_mut() {
        let Some(animation) = animation_store.get(&player.animation_key) else {
            trace!("No stored animation '{}'", player.animation_key);
            continue;
        };

        let current_start = player.start_tick;
        let start = match current_start {
            Some(start) => start,
            None => {
                player.start_tick = Some(now);
                now
            }
        };
        let index = match animation.checked_index_since(start, now) {
            Some(index) => index,
            None => {
                warn!(
                    "Tick {} precedes start tick {} of '{}', restarting",
                    now, start, player.animation_key
                );
                player.start_tick = Some(now);
                0
            }
        };

        if player.frame_index != index {
            player.frame_index = index;
        }
    }
}
