// Counts a number of seconds and then asks for a spawn.
use bevy_ecs::prelude::Component;

/// Periodic spawn request timer.
///
/// Accumulates world time; when `elapsed` reaches `interval`, the
/// [`spawn_timer`](crate::systems::spawntimer::spawn_timer) system triggers a
/// [`SpawnTimerEvent`](crate::events::spawntimer::SpawnTimerEvent) carrying
/// `tag` and resets the timer. What gets spawned for a given tag is up to
/// the game's observers.
#[derive(Component, Clone, Debug)]
pub struct SpawnTimer {
    /// Seconds between spawn requests.
    pub interval: f32,
    /// Seconds accumulated since the last request.
    pub elapsed: f32,
    /// Game-defined label for what to spawn.
    pub tag: String,
}

impl SpawnTimer {
    pub fn new(interval: f32, tag: impl Into<String>) -> Self {
        SpawnTimer {
            interval,
            elapsed: 0.0,
            tag: tag.into(),
        }
    }

    /// Subtract one interval, keeping the overshoot for consistent pacing.
    pub fn reset(&mut self) {
        self.elapsed -= self.interval;
    }
}
