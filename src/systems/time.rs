//! Tick update system.
//!
//! Updates the shared [`WorldTicks`](crate::resources::worldticks::WorldTicks)
//! resource once per step of the playback loop.
use bevy_ecs::prelude::*;

use crate::resources::worldticks::WorldTicks;

/// Move the world clock to `tick`, recording how far it moved.
///
/// `delta` saturates at the `i64` range.
pub fn set_world_tick(world: &mut World, tick: i64) {
    let mut wt = world.resource_mut::<WorldTicks>();
    wt.delta = tick.saturating_sub(wt.tick);
    wt.tick = tick;
}

/// Advance the world clock by `dt` ticks.
///
/// The clock saturates at the `i64` range; `delta` records the distance
/// actually moved.
pub fn advance_world_ticks(world: &mut World, dt: i64) {
    let mut wt = world.resource_mut::<WorldTicks>();
    let tick = wt.tick.saturating_add(dt);
    wt.delta = tick - wt.tick;
    wt.tick = tick;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_advance() {
        let mut world = World::new();
        world.insert_resource(WorldTicks::at(10));

        advance_world_ticks(&mut world, 5);
        assert_eq!(*world.resource::<WorldTicks>(), WorldTicks { tick: 15, delta: 5 });

        set_world_tick(&mut world, 12);
        assert_eq!(*world.resource::<WorldTicks>(), WorldTicks { tick: 12, delta: -3 });
    }

    #[test]
    fn test_clock_saturates_at_range_ends() {
        let mut world = World::new();
        world.insert_resource(WorldTicks::at(i64::MAX - 2));

        advance_world_ticks(&mut world, 10);
        assert_eq!(
            *world.resource::<WorldTicks>(),
            WorldTicks { tick: i64::MAX, delta: 2 }
        );

        set_world_tick(&mut world, i64::MIN);
        assert_eq!(
            *world.resource::<WorldTicks>(),
            WorldTicks { tick: i64::MIN, delta: i64::MIN }
        );

        advance_world_ticks(&mut world, -5);
        assert_eq!(
            *world.resource::<WorldTicks>(),
            WorldTicks { tick: i64::MIN, delta: 0 }
        );
    }
}
