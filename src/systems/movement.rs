//! Movement system.
//!
//! Advances every entity that has both a
//! [`MapPosition`](crate::components::mapposition::MapPosition) and a
//! [`MotionApplier`](crate::components::motion::MotionApplier) by exactly one
//! motion vector. Velocity is expressed in world units per tick, so no
//! delta-time scaling happens here.
//!
//! # Call-order contract
//!
//! The tick driver must run velocity mutations before this system and any
//! collision correction after it. A collision pass that stops an entity can
//! restore the position recorded by
//! [`MotionApplier::previous_location`](crate::components::motion::MotionApplier::previous_location),
//! since this system has already applied the tick's motion by the time
//! collisions are detected.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::motion::MotionApplier;

pub fn movement(mut query: Query<(&mut MapPosition, &mut MotionApplier)>) {
    for (mut position, mut motion) in query.iter_mut() {
        position.pos = motion.update_location(position.pos);
    }
}
