//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `motionconfig` – gravity defaults loaded from the configuration file
//! - `worldtime` – simulation time and delta
pub mod motionconfig;
pub mod worldtime;
