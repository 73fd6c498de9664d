//! Spawn timer system.
//!
//! Accumulates world time on every
//! [`SpawnTimer`](crate::components::spawntimer::SpawnTimer) component and
//! triggers a [`SpawnTimerEvent`](crate::events::spawntimer::SpawnTimerEvent)
//! each time an interval elapses. Observers registered on the world decide
//! what a tag spawns.

use bevy_ecs::prelude::*;

use crate::components::spawntimer::SpawnTimer;
use crate::events::spawntimer::SpawnTimerEvent;
use crate::resources::worldtime::WorldTime;

/// Update all spawn timers and emit events when they expire.
///
/// The timer resets by subtracting the interval, so long frames do not skew
/// the spawn cadence.
pub fn spawn_timer(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut SpawnTimer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        timer.elapsed += world_time.delta;
        if timer.elapsed >= timer.interval {
            commands.trigger(SpawnTimerEvent {
                spawner: entity,
                tag: timer.tag.clone(),
            });
            timer.reset();
        }
    }
}
