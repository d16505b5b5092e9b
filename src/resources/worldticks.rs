use bevy_ecs::prelude::Resource;

/// Shared playback clock, in ticks.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldTicks {
    pub tick: i64,
    /// Ticks advanced by the last update. Negative if the clock was rewound.
    pub delta: i64,
}

impl WorldTicks {
    pub fn at(tick: i64) -> Self {
        Self { tick, delta: 0 }
    }
}
