//! Spawn timer expiration events.
//!
//! When a [`SpawnTimer`](crate::components::spawntimer::SpawnTimer) reaches
//! its interval, a [`SpawnTimerEvent`] is triggered. Observers react by
//! spawning whatever the tag means to the game; the engine itself does not
//! interpret tags.

use bevy_ecs::prelude::*;

/// Event emitted when a spawn timer expires.
///
/// `spawner` is the entity carrying the timer, `tag` the game-defined label
/// of what should be spawned.
#[derive(Event, Debug, Clone)]
pub struct SpawnTimerEvent {
    /// The entity whose timer expired.
    pub spawner: Entity,
    /// Game-defined label for what to spawn.
    pub tag: String,
}
