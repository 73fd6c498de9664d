//! Event types exchanged across systems.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`spawntimer`] – periodic spawn requests emitted by the spawn timer system
pub mod spawntimer;
