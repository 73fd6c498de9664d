//! ECS components for entities.
//!
//! This module groups the component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`motion`] – kinematic motion state: velocity, bearing, halt signal
//! - [`spawntimer`] – periodic timer that requests entity spawns

pub mod mapposition;
pub mod motion;
pub mod spawntimer;
