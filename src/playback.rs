//! Headless playback.
//!
//! Builds an ECS world around one stored animation, steps the world clock
//! through the configured ticks and records which frame each tick shows.

use bevy_ecs::prelude::*;
use log::info;
use serde::Serialize;

use crate::animation::{Animation, AnimationBuilder, AnimationError};
use crate::components::animation::AnimationPlayer;
use crate::resources::animationstore::AnimationStore;
use crate::resources::playerconfig::PlayerConfig;
use crate::resources::worldticks::WorldTicks;
use crate::systems::animation::animation;
use crate::systems::time::set_world_tick;

/// Store key of the animation loaded from a [`PlayerConfig`].
pub const MAIN_ANIMATION: &str = "main";

/// One line of a playback timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub tick: i64,
    pub frame: usize,
    pub file: String,
}

/// Load the animation described by `config`.
///
/// A pattern, when set, wins over the explicit file list.
pub fn load_animation(config: &PlayerConfig) -> Result<Animation, AnimationError> {
    let animation = match &config.pattern {
        Some(pattern) => {
            Animation::from_pattern(config.format, config.ticks_per_frame, config.frames, pattern)?
        }
        None => AnimationBuilder::new(config.format, config.ticks_per_frame)
            .frames(config.files.iter().cloned())
            .build()?,
    };
    Ok(animation.with_wrap(config.wrap))
}

/// World holding `animation` under [`MAIN_ANIMATION`] and one player for it.
pub fn build_world(animation: Animation, start_tick: i64) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(WorldTicks::at(start_tick));

    let mut store = AnimationStore::new();
    store.insert(MAIN_ANIMATION, animation);
    world.insert_resource(store);

    let player = world.spawn(AnimationPlayer::new(MAIN_ANIMATION)).id();
    (world, player)
}

/// Step `world` through `ticks`, recording the frame `player` shows at each.
pub fn run_timeline(
    world: &mut World,
    player: Entity,
    ticks: impl IntoIterator<Item = i64>,
) -> Vec<TimelineEntry> {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);

    let mut timeline = Vec::new();
    for tick in ticks {
        set_world_tick(world, tick);
        schedule.run(world);

        let Some(state) = world.get::<AnimationPlayer>(player) else {
            break;
        };
        let frame = state.frame_index;
        let file = world
            .resource::<AnimationStore>()
            .get(&state.animation_key)
            .and_then(|anim| anim.source(frame))
            .unwrap_or_default()
            .to_string();
        timeline.push(TimelineEntry { tick, frame, file });
    }
    timeline
}

/// Load the configured animation and play it through the configured ticks.
pub fn play(config: &PlayerConfig) -> Result<Vec<TimelineEntry>, AnimationError> {
    let animation = load_animation(config)?;
    let (mut world, player) = build_world(animation, config.start);
    let timeline = run_timeline(&mut world, player, config.ticks());
    info!("Played {} ticks", timeline.len());

    let released = world.resource_mut::<AnimationStore>().unload(MAIN_ANIMATION);
    info!("Released {} frames", released);
    Ok(timeline)
}
