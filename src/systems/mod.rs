//! Engine systems.
//!
//! This module groups the ECS systems that advance the simulation.
//!
//! Submodules overview
//! - [`movement`] – advance positions by one motion vector per tick
//! - [`spawntimer`] – emit spawn request events on timer expiry
//! - [`time`] – update simulation time and delta

pub mod movement;
pub mod spawntimer;
pub mod time;
