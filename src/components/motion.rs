//! Kinematic motion component storing velocity as a single 2D vector.
//!
//! The [`MotionApplier`] component tracks an entity's velocity and converts
//! between vector form and (speed, direction) polar form. Direction is a
//! compass bearing in degrees: 0 points along `(0, 1)` ("north") and angles
//! grow clockwise, so 90 is right, 180 is down and 270 is left.
//!
//! A zero vector has no orientation, so the component caches the last known
//! bearing whenever speed drops to zero. Stopping and resuming an entity
//! keeps it pointing the same way.
//!
//! The component also retains the position it was given on the last
//! [`MotionApplier::update_location`] call. Collision handling in the
//! surrounding engine runs after all entities have moved for the tick, and
//! the retained position lets a collision pass roll an entity back without
//! waiting an extra tick.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::warn;

/// Default gravitational constant carried as inert configuration.
pub const DEFAULT_GRAVITY_CONSTANT: f32 = 0.2;
/// Default gravitational direction, pointing down.
pub const DEFAULT_GRAVITY_DIRECTION: f32 = 180.0;

/// Bearing 0 points this way.
const ZERO_ANGLE_IDENTITY: Vec2 = Vec2::new(0.0, 1.0);

/// Symbolic compass direction, convertible to a bearing in degrees.
///
/// Convenience vocabulary for the `*_towards` methods on [`MotionApplier`];
/// everything delegates to the numeric-degree primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Bearing in degrees for this direction.
    pub fn degrees(self) -> f32 {
        match self {
            Direction::Up => 0.0,
            Direction::Right => 90.0,
            Direction::Down => 180.0,
            Direction::Left => 270.0,
        }
    }
}

impl From<Direction> for f32 {
    fn from(direction: Direction) -> Self {
        direction.degrees()
    }
}

/// Kinematic motion state for one entity.
///
/// Does not abide by the laws of physics; it only provides basic behaviour
/// around speed and direction. Intended to be mutated by game logic each
/// tick and consumed by the [`movement`](crate::systems::movement::movement)
/// system, which calls [`update_location`](Self::update_location) exactly
/// once per tick.
///
/// # Fields
/// - `motion` - velocity in world units per tick; its length is the speed
/// - `cached_direction` - bearing remembered while `motion` is the zero vector
/// - `previous_location` - position before the most recent advancement
/// - `halted` - set when a speed-set transitioned from nonzero to zero
/// - `gravity_*` - inert configuration, never applied by any update path
///
/// # Example
/// ```ignore
/// let mut motion = MotionApplier::new();
/// motion.set_motion(4.0, 90.0);          // 4 units/tick to the right
/// motion.set_speed(0.0);                 // stop; bearing 90 is cached
/// motion.set_speed(4.0);                 // resume, still heading right
/// assert!(motion.is_halted() == false);
/// ```
#[derive(Component, Clone, Debug)]
pub struct MotionApplier {
    /// Current velocity. Its magnitude is the speed, its orientation (when
    /// nonzero) is the direction.
    motion: Vec2,
    /// Bearing in degrees, present only while `motion` is the zero vector.
    cached_direction: Option<f32>,
    /// Position handed to the last `update_location` call.
    previous_location: Option<Vec2>,
    /// One-shot signal: the last speed-set stopped a moving entity.
    halted: bool,
    gravity_constant: f32,
    gravity_direction: f32,
    gravity_enabled: bool,
}

impl Default for MotionApplier {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionApplier {
    /// Create a motion state at rest, with default gravity configuration.
    pub fn new() -> Self {
        Self {
            motion: Vec2::ZERO,
            cached_direction: None,
            previous_location: None,
            halted: false,
            gravity_constant: DEFAULT_GRAVITY_CONSTANT,
            gravity_direction: DEFAULT_GRAVITY_DIRECTION,
            gravity_enabled: true,
        }
    }

    /// Set speed and direction in one call.
    ///
    /// Equivalent to [`set_speed`](Self::set_speed) followed by
    /// [`set_direction`](Self::set_direction), in that order: the speed-set
    /// resolves halt/resume bookkeeping against whatever bearing was in
    /// effect, then the explicit direction overrides it.
    pub fn set_motion(&mut self, speed: f32, direction: f32) {
        self.set_speed(speed);
        self.set_direction(direction);
    }

    /// [`set_motion`](Self::set_motion) with a named direction.
    pub fn set_motion_towards(&mut self, speed: f32, direction: Direction) {
        self.set_motion(speed, direction.degrees());
    }

    /// Add a polar (speed, bearing) vector to the current motion.
    ///
    /// A vector sum; does not replace the current state.
    pub fn add_to_motion(&mut self, speed: f32, direction: f32) {
        self.motion += Self::create_vector(speed, direction);
    }

    /// [`add_to_motion`](Self::add_to_motion) with a named direction.
    pub fn add_to_motion_towards(&mut self, speed: f32, direction: Direction) {
        self.add_to_motion(speed, direction.degrees());
    }

    /// Rescale the motion to the given magnitude, preserving orientation.
    ///
    /// Stopping (new speed exactly zero) caches the current bearing so a
    /// later speed-set resumes on the same heading. Starting from rest
    /// without any recorded bearing defaults to bearing 0.
    pub fn set_speed(&mut self, new_speed: f32) {
        self.halted = new_speed == 0.0 && self.motion.length() != 0.0;

        if new_speed == 0.0 {
            // Capture the bearing before the rescale wipes the vector.
            self.cached_direction = Some(self.direction());
        }

        if self.motion == Vec2::ZERO {
            self.motion = Vec2::new(0.0, new_speed);
        } else {
            self.motion = self.motion.normalize() * new_speed;
        }

        if let Some(direction) = self.cached_direction {
            // Re-caches at zero magnitude, bakes into the vector otherwise.
            self.set_direction(direction);
        }
    }

    /// Point the motion at the given bearing, keeping the current speed.
    ///
    /// At zero speed there is nothing to rotate; the bearing is cached until
    /// the next nonzero speed-set.
    pub fn set_direction(&mut self, direction: f32) {
        if self.motion.length() == 0.0 {
            self.cached_direction = Some(direction);
        } else {
            self.motion = Self::create_vector(self.motion.length(), direction);
            self.cached_direction = None;
        }
    }

    /// [`set_direction`](Self::set_direction) with a named direction.
    pub fn set_direction_towards(&mut self, direction: Direction) {
        self.set_direction(direction.degrees());
    }

    /// Current speed, the magnitude of the motion vector.
    pub fn speed(&self) -> f32 {
        self.motion.length()
    }

    /// Current bearing in degrees, normalized to `[0, 360)`.
    ///
    /// Returns the cached bearing while at rest. Otherwise the unsigned
    /// angle to `(0, 1)` is resolved into a full bearing: vectors with a
    /// negative x component map into `(180, 360)`.
    pub fn direction(&self) -> f32 {
        match self.cached_direction {
            Some(direction) => direction.rem_euclid(360.0),
            None => Self::bearing(self.motion),
        }
    }

    /// Add `increment` along the current orientation.
    ///
    /// At zero speed there is no orientation to follow; the call is ignored
    /// with a warning. Set a direction or a nonzero speed first.
    pub fn increment_speed(&mut self, increment: f32) {
        if self.motion == Vec2::ZERO {
            warn!("increment_speed on a zero motion vector has no orientation to follow; ignored");
            return;
        }
        self.motion += self.motion.normalize() * increment;
    }

    /// Scale the motion vector by `factor`.
    ///
    /// Positive factors preserve orientation; a negative factor flips it by
    /// 180 degrees, which is permitted behaviour.
    pub fn multiply_speed(&mut self, factor: f32) {
        self.motion *= factor;
    }

    /// Rotate the current bearing by `rotation` degrees.
    pub fn change_direction(&mut self, rotation: f32) {
        let current = self.direction();
        self.set_direction(rotation + current);
    }

    /// The raw motion vector applied on [`update_location`](Self::update_location).
    pub fn motion(&self) -> Vec2 {
        self.motion
    }

    /// Advance `current_location` by one tick of motion.
    ///
    /// Stores `current_location` as the previous location and returns the
    /// advanced position. Does not mutate the velocity.
    pub fn update_location(&mut self, current_location: Vec2) -> Vec2 {
        self.previous_location = Some(current_location);
        current_location + self.motion
    }

    /// Position before the most recent advancement, if any.
    ///
    /// Collision detection runs only after all entities have been advanced
    /// for the tick. An entity that reacts to a collision by zeroing its
    /// speed has already received its last motion; this value lets the
    /// collision pass compute a correct resting position instead of waiting
    /// a tick.
    pub fn previous_location(&self) -> Option<Vec2> {
        self.previous_location
    }

    /// Whether the last speed-set stopped a moving entity.
    ///
    /// Never cleared automatically; consumers reset it through
    /// [`set_halted`](Self::set_halted) when the signal should not persist
    /// across ticks.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Set the halted signal. No other side effects.
    pub fn set_halted(&mut self, halted: bool) {
        self.halted = halted;
    }

    /// Gravitational constant. Inert configuration: no update path applies it.
    pub fn gravity_constant(&self) -> f32 {
        self.gravity_constant
    }

    /// Set the gravitational constant.
    pub fn set_gravity_constant(&mut self, gravity_constant: f32) {
        self.gravity_constant = gravity_constant;
    }

    /// Gravitational direction in degrees. Inert configuration.
    pub fn gravity_direction(&self) -> f32 {
        self.gravity_direction
    }

    /// Set the gravitational direction.
    pub fn set_gravity_direction(&mut self, gravity_direction: f32) {
        self.gravity_direction = gravity_direction;
    }

    /// Whether gravitational pull is enabled. Inert configuration.
    pub fn is_gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Enable or disable gravitational pull.
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    /// Build a vector of the given magnitude at the given bearing.
    ///
    /// Compass convention: bearing 0 yields `(0, 1)` and angles grow
    /// clockwise, hence `(sin a, cos a)` rather than the trigonometric
    /// `(cos a, sin a)`.
    fn create_vector(speed: f32, direction: f32) -> Vec2 {
        let radians = direction.to_radians();
        Vec2::new(radians.sin(), radians.cos()) * speed
    }

    /// Full bearing of a vector in `[0, 360)`.
    ///
    /// The unsigned angle to `(0, 1)` covers `[0, 180]` and cannot tell left
    /// from right; a negative x component resolves into `360 - angle`. The
    /// zero vector has no orientation and reads as bearing 0.
    fn bearing(v: Vec2) -> f32 {
        if v == Vec2::ZERO {
            return 0.0;
        }
        let cos = (v.dot(ZERO_ANGLE_IDENTITY) / v.length()).clamp(-1.0, 1.0);
        let angle = cos.acos().to_degrees();
        if v.x < 0.0 { 360.0 - angle } else { angle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    // ==================== DIRECTION ENUM TESTS ====================

    #[test]
    fn test_direction_degrees() {
        assert!(approx_eq(Direction::Up.degrees(), 0.0));
        assert!(approx_eq(Direction::Right.degrees(), 90.0));
        assert!(approx_eq(Direction::Down.degrees(), 180.0));
        assert!(approx_eq(Direction::Left.degrees(), 270.0));
    }

    #[test]
    fn test_direction_into_f32() {
        let degrees: f32 = Direction::Left.into();
        assert!(approx_eq(degrees, 270.0));
    }

    // ==================== CONSTRUCTOR TESTS ====================

    #[test]
    fn test_new_starts_at_rest() {
        let motion = MotionApplier::new();
        assert!(vec_approx_eq(motion.motion(), Vec2::ZERO));
        assert!(approx_eq(motion.speed(), 0.0));
        assert!(!motion.is_halted());
        assert!(motion.previous_location().is_none());
    }

    #[test]
    fn test_new_gravity_defaults() {
        let motion = MotionApplier::new();
        assert!(approx_eq(motion.gravity_constant(), 0.2));
        assert!(approx_eq(motion.gravity_direction(), 180.0));
        assert!(motion.is_gravity_enabled());
    }

    // ==================== POLAR/VECTOR CONVERSION TESTS ====================

    #[test]
    fn test_set_motion_round_trip() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        assert!(approx_eq(motion.speed(), 10.0));
        assert!(approx_eq(motion.direction(), 45.0));
    }

    #[test]
    fn test_set_motion_cardinal_vectors() {
        let mut motion = MotionApplier::new();
        motion.set_motion(1.0, 0.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(0.0, 1.0)));
        motion.set_motion(1.0, 90.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(1.0, 0.0)));
        motion.set_motion(1.0, 180.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(0.0, -1.0)));
        motion.set_motion(1.0, 270.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_direction_western_bearings() {
        // Negative x resolves through the 360 - angle correction.
        let mut motion = MotionApplier::new();
        motion.set_motion(5.0, 315.0);
        assert!(approx_eq(motion.direction(), 315.0));
        assert!(motion.motion().x < 0.0);
    }

    #[test]
    fn test_set_motion_towards() {
        let mut motion = MotionApplier::new();
        motion.set_motion_towards(3.0, Direction::Right);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(3.0, 0.0)));
        assert!(approx_eq(motion.direction(), 90.0));
    }

    #[test]
    fn test_add_to_motion_is_a_vector_sum() {
        let mut motion = MotionApplier::new();
        motion.set_motion(3.0, 0.0);
        motion.add_to_motion(4.0, 90.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(4.0, 3.0)));
        assert!(approx_eq(motion.speed(), 5.0));
    }

    #[test]
    fn test_add_to_motion_towards_opposite_cancels() {
        let mut motion = MotionApplier::new();
        motion.set_motion_towards(2.0, Direction::Up);
        motion.add_to_motion_towards(2.0, Direction::Down);
        assert!(approx_eq(motion.speed(), 0.0));
    }

    #[test]
    fn test_magnitude_identity_across_operations() {
        let mut motion = MotionApplier::new();
        motion.set_motion(7.5, 123.0);
        motion.change_direction(42.0);
        motion.multiply_speed(2.0);
        motion.add_to_motion(1.0, 10.0);
        assert!(approx_eq(motion.speed(), motion.motion().length()));
    }

    // ==================== SET SPEED TESTS ====================

    #[test]
    fn test_set_speed_preserves_orientation() {
        let mut motion = MotionApplier::new();
        motion.set_motion(5.0, 45.0);
        motion.set_speed(10.0);
        assert!(approx_eq(motion.speed(), 10.0));
        assert!(approx_eq(motion.direction(), 45.0));
    }

    #[test]
    fn test_set_speed_from_rest_defaults_to_reference_orientation() {
        let mut motion = MotionApplier::new();
        motion.set_speed(4.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(0.0, 4.0)));
        assert!(approx_eq(motion.direction(), 0.0));
    }

    #[test]
    fn test_set_speed_negative_flips_orientation() {
        let mut motion = MotionApplier::new();
        motion.set_motion(5.0, 0.0);
        motion.set_speed(-5.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(0.0, -5.0)));
    }

    // ==================== ZERO-SPEED DIRECTION CACHE TESTS ====================

    #[test]
    fn test_direction_survives_stop_and_resume() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.set_speed(0.0);
        motion.set_speed(10.0);
        assert!(approx_eq(motion.direction(), 45.0));
        assert!(approx_eq(motion.speed(), 10.0));
    }

    #[test]
    fn test_direction_readable_while_stopped() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 135.0);
        motion.set_speed(0.0);
        assert!(approx_eq(motion.speed(), 0.0));
        assert!(approx_eq(motion.direction(), 135.0));
    }

    #[test]
    fn test_western_bearing_survives_stop_and_resume() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 315.0);
        motion.set_speed(0.0);
        motion.set_speed(10.0);
        assert!(approx_eq(motion.direction(), 315.0));
    }

    #[test]
    fn test_set_direction_at_rest_is_cached_until_resume() {
        let mut motion = MotionApplier::new();
        motion.set_direction(90.0);
        assert!(approx_eq(motion.speed(), 0.0));
        assert!(approx_eq(motion.direction(), 90.0));
        motion.set_speed(6.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::new(6.0, 0.0)));
    }

    #[test]
    fn test_explicit_direction_overrides_cache() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.set_speed(0.0);
        // set_motion applies the speed first, then the explicit direction wins.
        motion.set_motion(10.0, 270.0);
        assert!(approx_eq(motion.direction(), 270.0));
    }

    // ==================== HALT DETECTION TESTS ====================

    #[test]
    fn test_halt_on_nonzero_to_zero() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.set_speed(0.0);
        assert!(motion.is_halted());
    }

    #[test]
    fn test_halt_is_one_shot() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.set_speed(0.0);
        assert!(motion.is_halted());
        motion.set_speed(0.0); // already at rest, not a transition
        assert!(!motion.is_halted());
    }

    #[test]
    fn test_halt_cleared_on_resume() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.set_speed(0.0);
        motion.set_speed(5.0);
        assert!(!motion.is_halted());
    }

    #[test]
    fn test_halt_not_set_by_other_mutators() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.multiply_speed(0.0); // zeroes the vector, but not via set_speed
        assert!(!motion.is_halted());
    }

    #[test]
    fn test_set_halted_has_no_side_effects() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.set_halted(true);
        assert!(motion.is_halted());
        assert!(approx_eq(motion.speed(), 10.0));
        motion.set_halted(false);
        assert!(!motion.is_halted());
    }

    // ==================== SPEED ARITHMETIC TESTS ====================

    #[test]
    fn test_increment_speed_follows_orientation() {
        let mut motion = MotionApplier::new();
        motion.set_motion(3.0, 90.0);
        motion.increment_speed(2.0);
        assert!(approx_eq(motion.speed(), 5.0));
        assert!(approx_eq(motion.direction(), 90.0));
    }

    #[test]
    fn test_increment_speed_at_rest_is_ignored() {
        let mut motion = MotionApplier::new();
        motion.increment_speed(5.0);
        assert!(vec_approx_eq(motion.motion(), Vec2::ZERO));
        assert!(approx_eq(motion.speed(), 0.0));
    }

    #[test]
    fn test_multiply_speed_preserves_orientation() {
        let mut motion = MotionApplier::new();
        motion.set_motion(4.0, 45.0);
        motion.multiply_speed(2.5);
        assert!(approx_eq(motion.speed(), 10.0));
        assert!(approx_eq(motion.direction(), 45.0));
    }

    #[test]
    fn test_multiply_speed_negative_flips_by_180() {
        let mut motion = MotionApplier::new();
        motion.set_motion(4.0, 90.0);
        motion.multiply_speed(-1.0);
        assert!(approx_eq(motion.speed(), 4.0));
        assert!(approx_eq(motion.direction(), 270.0));
    }

    // ==================== ROTATION TESTS ====================

    #[test]
    fn test_change_direction_rotates() {
        let mut motion = MotionApplier::new();
        motion.set_motion(5.0, 30.0);
        motion.change_direction(60.0);
        assert!(approx_eq(motion.direction(), 90.0));
        assert!(approx_eq(motion.speed(), 5.0));
    }

    #[test]
    fn test_change_direction_wraps_past_360() {
        let mut motion = MotionApplier::new();
        motion.set_motion(5.0, 0.0);
        motion.change_direction(370.0);
        assert!(approx_eq(motion.direction(), 10.0));
    }

    #[test]
    fn test_change_direction_at_rest_updates_cache() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.set_speed(0.0);
        motion.change_direction(90.0);
        motion.set_speed(10.0);
        assert!(approx_eq(motion.direction(), 135.0));
    }

    // ==================== LOCATION ADVANCEMENT TESTS ====================

    #[test]
    fn test_update_location_advances_by_motion() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 0.0);
        let next = motion.update_location(Vec2::new(100.0, 100.0));
        assert!(vec_approx_eq(next, Vec2::new(100.0, 110.0)));
    }

    #[test]
    fn test_update_location_retains_previous_position() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 0.0);
        motion.update_location(Vec2::new(100.0, 100.0));
        let previous = motion.previous_location().unwrap();
        assert!(vec_approx_eq(previous, Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_update_location_overwrites_history() {
        let mut motion = MotionApplier::new();
        motion.set_motion(1.0, 90.0);
        motion.update_location(Vec2::new(0.0, 0.0));
        motion.update_location(Vec2::new(1.0, 0.0));
        let previous = motion.previous_location().unwrap();
        assert!(vec_approx_eq(previous, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_update_location_does_not_mutate_velocity() {
        let mut motion = MotionApplier::new();
        motion.set_motion(10.0, 45.0);
        motion.update_location(Vec2::new(1.0, 2.0));
        assert!(approx_eq(motion.speed(), 10.0));
        assert!(approx_eq(motion.direction(), 45.0));
    }

    #[test]
    fn test_no_drift_when_idle() {
        let mut motion = MotionApplier::new();
        let p = Vec2::new(12.0, 34.0);
        for _ in 0..5 {
            let next = motion.update_location(p);
            assert!(vec_approx_eq(next, p));
        }
    }

    // ==================== GRAVITY CONFIGURATION TESTS ====================

    #[test]
    fn test_gravity_accessors_are_inert() {
        let mut motion = MotionApplier::new();
        motion.set_motion(5.0, 90.0);
        motion.set_gravity_constant(9.8);
        motion.set_gravity_direction(90.0);
        motion.set_gravity_enabled(false);
        assert!(approx_eq(motion.gravity_constant(), 9.8));
        assert!(approx_eq(motion.gravity_direction(), 90.0));
        assert!(!motion.is_gravity_enabled());
        // None of it touches the velocity.
        let next = motion.update_location(Vec2::ZERO);
        assert!(vec_approx_eq(next, Vec2::new(5.0, 0.0)));
    }
}
