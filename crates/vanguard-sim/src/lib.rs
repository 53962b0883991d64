//! Simulation engine for the VANGUARD squad system.
//!
//! Owns the hecs ECS world, runs the manager's constraint passes and the
//! activation/spawn pipeline at a fixed tick rate, and produces
//! SquadSystemSnapshots for the frontend.

pub mod engine;
pub mod manager;
pub mod squad;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use vanguard_core as core;
