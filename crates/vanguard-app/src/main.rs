//! Headless demo for the VANGUARD squad system.
//!
//! Builds a three-trigger scenario through the public command API, runs
//! the engine until the probe completes its pass, logs the events as they
//! happen, and prints the final snapshot as JSON.

use log::info;

use vanguard_core::commands::PlayerCommand;
use vanguard_core::enums::{
    DistributionStrategy, FormationShape, GamePhase, UnitArchetype,
};
use vanguard_core::types::{FormationParams, Position};
use vanguard_sim::engine::{SimConfig, SimulationEngine};

fn main() -> Result<(), String> {
    env_logger::init();

    let mut engine = SimulationEngine::new(SimConfig::default());

    info!("Building scenario...");
    engine.queue_commands([
        // Trigger 0: a wedge of fighters behind an ace.
        PlayerCommand::AddTrigger,
        PlayerCommand::AddSquad { trigger_id: 0 },
        PlayerCommand::SetFormationShape {
            squad_id: 0,
            shape: FormationShape::Wedge,
        },
        PlayerCommand::SetFormationParams {
            squad_id: 0,
            params: FormationParams {
                num_objects: 7,
                spawn_distance: 2.0,
                geometry_faces: 3,
                wedge_angle_degrees: 70.0,
            },
        },
        PlayerCommand::SetDistribution {
            squad_id: 0,
            distribution: DistributionStrategy::AlternateLeader {
                prefab: Some(UnitArchetype::Fighter),
                leader: Some(UnitArchetype::Ace),
            },
        },
        // Trigger 1: a ring of drones.
        PlayerCommand::AddTrigger,
        PlayerCommand::AddSquad { trigger_id: 1 },
        PlayerCommand::SetFormationShape {
            squad_id: 1,
            shape: FormationShape::Circular,
        },
        PlayerCommand::SetFormationParams {
            squad_id: 1,
            params: FormationParams {
                num_objects: 8,
                spawn_distance: 1.5,
                ..Default::default()
            },
        },
        PlayerCommand::SetDistribution {
            squad_id: 1,
            distribution: DistributionStrategy::Default {
                prefab: Some(UnitArchetype::Drone),
            },
        },
        // Trigger 2: three spokes with gunship overrides on the first ring.
        PlayerCommand::AddTrigger,
        PlayerCommand::AddSquad { trigger_id: 2 },
        PlayerCommand::SetFormationShape {
            squad_id: 2,
            shape: FormationShape::Spoke,
        },
        PlayerCommand::SetFormationParams {
            squad_id: 2,
            params: FormationParams {
                num_objects: 10,
                spawn_distance: 2.0,
                geometry_faces: 3,
                ..Default::default()
            },
        },
        PlayerCommand::SetDistribution {
            squad_id: 2,
            distribution: DistributionStrategy::Custom {
                prefab: Some(UnitArchetype::Fighter),
                overrides: vec![
                    Some(UnitArchetype::Ace),
                    Some(UnitArchetype::Gunship),
                    Some(UnitArchetype::Gunship),
                    Some(UnitArchetype::Gunship),
                ],
            },
        },
        PlayerCommand::MoveSquad {
            squad_id: 2,
            position: Position::new(4.0, 30.0, 0.0),
        },
        PlayerCommand::StartRun,
    ]);

    info!("Running...");
    let mut last = engine.tick();
    while engine.phase() != GamePhase::RunComplete {
        last = engine.tick();
        for event in &last.events {
            info!("tick {}: {:?}", last.time.tick, event);
        }
        if last.time.tick > 10_000 {
            return Err("run did not complete within 10000 ticks".into());
        }
    }

    let json =
        serde_json::to_string_pretty(&last).map_err(|err| format!("snapshot encode: {err}"))?;
    println!("{json}");

    info!(
        "Run complete after {} ticks ({:.1}s simulated)",
        last.time.tick, last.time.elapsed_secs
    );
    Ok(())
}
