//! Formation mathematics for VANGUARD.
//!
//! Generates 2D layout patterns (offsets relative to a squad's origin) and
//! the leader/follower link graph over the spawned slots. Pure functions
//! over plain data — no ECS dependency, consumed by the sim crate.

pub mod generator;
pub mod linker;

pub use vanguard_core as core;

#[cfg(test)]
mod tests;
