//! Simulation engine — the core of the squad system.
//!
//! `SimulationEngine` owns the hecs ECS world, the manager state, and the
//! ordered trigger list; processes queued commands at the tick boundary;
//! runs all systems; and produces `SquadSystemSnapshot`s. Completely
//! headless and deterministic — no RNG anywhere.
//!
//! Structural mutation (insert/remove triggers and squads) happens only
//! here, between system passes, so no list is ever edited while a system
//! iterates it.

use std::collections::VecDeque;

use hecs::World;

use vanguard_core::commands::PlayerCommand;
use vanguard_core::components::*;
use vanguard_core::constants::RUN_END_MARGIN;
use vanguard_core::enums::{DistributionStrategy, GamePhase};
use vanguard_core::events::SquadEvent;
use vanguard_core::state::SquadSystemSnapshot;
use vanguard_core::types::{Position, SimTime, Size};

use crate::manager::ManagerState;
use crate::squad;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// World position of the manager; triggers stack north of it.
    pub manager_position: Position,
    /// Canonical trigger size.
    pub spawn_area: Size,
    /// Whether triggers are forced onto the manager's x/z position.
    pub align_triggers: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        let manager = ManagerState::default();
        Self {
            manager_position: manager.position,
            spawn_area: manager.spawn_area,
            align_triggers: manager.align_triggers,
        }
    }
}

/// The simulation engine. Owns the ECS world and all squad-system state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    manager: ManagerState,
    /// Triggers in manager order. The only place this order lives.
    triggers: Vec<hecs::Entity>,
    next_trigger_id: u32,
    next_squad_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SquadEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            manager: ManagerState {
                position: config.manager_position,
                scale: Size::unit(),
                spawn_area: config.spawn_area,
                align_triggers: config.align_triggers,
            },
            triggers: Vec::new(),
            next_trigger_id: 0,
            next_squad_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. The constraint passes and layout refresh run in every
    /// unpaused phase; the probe, activation, and run completion only
    /// while Active.
    pub fn tick(&mut self) -> SquadSystemSnapshot {
        self.process_commands();

        if self.phase != GamePhase::Paused {
            systems::constraints::run(&mut self.world, &mut self.manager, &self.triggers);
            systems::layout::run(&mut self.world);
        }

        if self.phase == GamePhase::Active {
            systems::movement::run(&mut self.world);
            systems::activation::run(&mut self.world, &self.triggers, &mut self.events);
            self.check_run_complete();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.manager,
            &self.triggers,
            events,
        )
    }

    /// Get the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the manager state.
    pub fn manager(&self) -> &ManagerState {
        &self.manager
    }

    /// Triggers in manager order.
    pub fn triggers(&self) -> &[hecs::Entity] {
        &self.triggers
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands naming unknown ids are ignored
    /// with a warning; phase-invalid run commands are ignored silently.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::AddTrigger => self.add_trigger(),
            PlayerCommand::RemoveTrigger { trigger_id } => self.remove_trigger(trigger_id),
            PlayerCommand::MoveTrigger {
                trigger_id,
                position,
            } => {
                let Some(trigger) = self.find_trigger(trigger_id) else {
                    log::warn!("ignoring MoveTrigger for unknown trigger {trigger_id}");
                    return;
                };
                if let Ok(current) = self.world.query_one_mut::<&mut Position>(trigger) {
                    *current = position;
                }
            }
            PlayerCommand::AddSquad { trigger_id } => {
                let Some(trigger) = self.find_trigger(trigger_id) else {
                    log::warn!("ignoring AddSquad for unknown trigger {trigger_id}");
                    return;
                };
                let roster_len = self.roster(trigger).len();
                self.insert_squad(trigger, roster_len);
            }
            PlayerCommand::AddSquadBefore { squad_id } => self.insert_squad_relative(squad_id, 0),
            PlayerCommand::AddSquadAfter { squad_id } => self.insert_squad_relative(squad_id, 1),
            PlayerCommand::RemoveSquad { squad_id } => self.remove_squad(squad_id),
            PlayerCommand::SetFormationShape { squad_id, shape } => {
                let Some(entity) = self.find_squad(squad_id) else {
                    log::warn!("ignoring SetFormationShape for unknown squad {squad_id}");
                    return;
                };
                if let Ok(config) = self.world.query_one_mut::<&mut SquadConfig>(entity) {
                    config.shape = shape;
                }
                squad::set_positions(&mut self.world, entity);
            }
            PlayerCommand::SetFormationParams { squad_id, params } => {
                let Some(entity) = self.find_squad(squad_id) else {
                    log::warn!("ignoring SetFormationParams for unknown squad {squad_id}");
                    return;
                };
                if let Ok(config) = self.world.query_one_mut::<&mut SquadConfig>(entity) {
                    config.params = params;
                }
                squad::set_positions(&mut self.world, entity);
            }
            PlayerCommand::SetDistribution {
                squad_id,
                distribution,
            } => {
                let Some(entity) = self.find_squad(squad_id) else {
                    log::warn!("ignoring SetDistribution for unknown squad {squad_id}");
                    return;
                };
                let is_custom = matches!(distribution, DistributionStrategy::Custom { .. });
                if let Ok(config) = self.world.query_one_mut::<&mut SquadConfig>(entity) {
                    config.distribution = distribution;
                }
                // Switching into the Custom strategy re-reconciles the
                // position arrays against the object count.
                if is_custom {
                    squad::set_positions(&mut self.world, entity);
                }
            }
            PlayerCommand::SetCustomPosition {
                squad_id,
                slot,
                position,
            } => {
                let Some(entity) = self.find_squad(squad_id) else {
                    log::warn!("ignoring SetCustomPosition for unknown squad {squad_id}");
                    return;
                };
                squad::set_custom_position(&mut self.world, entity, slot, position);
            }
            PlayerCommand::MoveSquad { squad_id, position } => {
                let Some(entity) = self.find_squad(squad_id) else {
                    log::warn!("ignoring MoveSquad for unknown squad {squad_id}");
                    return;
                };
                if let Ok(current) = self.world.query_one_mut::<&mut Position>(entity) {
                    *current = position;
                }
            }
            PlayerCommand::SetSquadYaw { squad_id, yaw } => {
                let Some(entity) = self.find_squad(squad_id) else {
                    log::warn!("ignoring SetSquadYaw for unknown squad {squad_id}");
                    return;
                };
                if let Ok(orientation) = self.world.query_one_mut::<&mut Orientation>(entity) {
                    orientation.yaw = yaw;
                }
            }
            PlayerCommand::SetManagerPosition { position } => {
                self.manager.position = position;
            }
            PlayerCommand::SetManagerScale { scale } => {
                // Deliberately accepted as-is; the first constraint pass
                // resets it next tick.
                self.manager.scale = scale;
            }
            PlayerCommand::SetSpawnAreaSize { size } => {
                self.manager.spawn_area = size;
            }
            PlayerCommand::SetAlignTriggers { enabled } => {
                self.manager.align_triggers = enabled;
            }
            PlayerCommand::StartRun => self.start_run(),
            PlayerCommand::EndRun => self.end_run(),
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    // --- Trigger structure ---

    /// Append a new trigger just beyond the furthest existing one, spaced
    /// by the spawn-area depth.
    fn add_trigger(&mut self) {
        let mut furthest = 0.0f64;
        for &trigger in &self.triggers {
            if let Ok(position) = self.world.get::<&Position>(trigger) {
                if position.y > furthest {
                    furthest = position.y;
                }
            }
        }

        let position = Position::new(
            self.manager.position.x,
            furthest + self.manager.spawn_area.y,
            self.manager.position.z,
        );

        let trigger_id = self.next_trigger_id;
        self.next_trigger_id += 1;

        let entity =
            world_setup::spawn_trigger(&mut self.world, trigger_id, position, self.manager.spawn_area);
        self.triggers.push(entity);

        self.rename_all();
        self.events.push(SquadEvent::TriggerAdded { trigger_id });
    }

    /// Remove a trigger, destroying its squads and their spawned units.
    fn remove_trigger(&mut self, trigger_id: u32) {
        let Some(trigger) = self.find_trigger(trigger_id) else {
            log::warn!("ignoring RemoveTrigger for unknown trigger {trigger_id}");
            return;
        };

        for entity in self.roster(trigger) {
            squad::despawn_units(&mut self.world, entity);
            let _ = self.world.despawn(entity);
        }
        let _ = self.world.despawn(trigger);
        self.triggers.retain(|&t| t != trigger);

        self.rename_all();
        self.events.push(SquadEvent::TriggerRemoved { trigger_id });
    }

    // --- Squad structure ---

    /// Insert a new squad into a trigger's roster at the given index.
    /// The squad is placed one unit north of the trigger per existing
    /// roster entry, then clamped by the constraint passes.
    fn insert_squad(&mut self, trigger: hecs::Entity, index: usize) {
        let (trigger_id, trigger_position, roster_len) = {
            let Ok((volume, position, roster)) = self
                .world
                .query_one_mut::<(&TriggerVolume, &Position, &SquadRoster)>(trigger)
            else {
                return;
            };
            (volume.id, *position, roster.squads.len())
        };

        let position = Position::new(
            trigger_position.x,
            trigger_position.y + roster_len as f64 + 1.0,
            trigger_position.z,
        );

        let squad_id = self.next_squad_id;
        self.next_squad_id += 1;

        let entity = world_setup::spawn_squad(&mut self.world, squad_id, trigger, position);
        squad::set_positions(&mut self.world, entity);

        if let Ok(roster) = self.world.query_one_mut::<&mut SquadRoster>(trigger) {
            roster.squads.insert(index.min(roster.squads.len()), entity);
        }

        self.rename_all();
        self.events.push(SquadEvent::SquadAdded {
            squad_id,
            trigger_id,
        });
    }

    /// Insert a new squad next to a reference squad: offset 0 inserts
    /// before it, 1 after it.
    fn insert_squad_relative(&mut self, squad_id: u32, offset: usize) {
        let Some(reference) = self.find_squad(squad_id) else {
            log::warn!("ignoring squad insert near unknown squad {squad_id}");
            return;
        };
        // The owning trigger is populated at construction, always present.
        let Ok(owner) = self.world.get::<&OwnerTrigger>(reference).map(|o| o.trigger) else {
            return;
        };

        if let Some(index) = self.roster(owner).iter().position(|&s| s == reference) {
            self.insert_squad(owner, index + offset);
        }
    }

    /// Remove a squad and its spawned units from its trigger's roster.
    fn remove_squad(&mut self, squad_id: u32) {
        let Some(entity) = self.find_squad(squad_id) else {
            log::warn!("ignoring RemoveSquad for unknown squad {squad_id}");
            return;
        };
        let Ok(owner) = self.world.get::<&OwnerTrigger>(entity).map(|o| o.trigger) else {
            return;
        };

        if let Ok(roster) = self.world.query_one_mut::<&mut SquadRoster>(owner) {
            roster.squads.retain(|&s| s != entity);
        }
        squad::despawn_units(&mut self.world, entity);
        let _ = self.world.despawn(entity);

        self.rename_all();
        self.events.push(SquadEvent::SquadRemoved { squad_id });
    }

    // --- Run control ---

    /// Start a run: clear any previous run's units, reset time, spawn the
    /// probe at the manager position, and re-arm every trigger.
    fn start_run(&mut self) {
        if !matches!(self.phase, GamePhase::Setup | GamePhase::RunComplete) {
            return;
        }

        self.clear_run_entities();
        for &trigger in &self.triggers {
            if let Ok(volume) = self.world.query_one_mut::<&mut TriggerVolume>(trigger) {
                volume.probe_inside = false;
            }
        }

        self.time = SimTime::default();
        world_setup::spawn_probe(&mut self.world, self.manager.position);
        self.phase = GamePhase::Active;

        log::info!("run started");
        self.events.push(SquadEvent::RunStarted);
    }

    /// End the run by command: despawn the probe and all spawned units and
    /// return to Setup.
    fn end_run(&mut self) {
        if self.phase == GamePhase::Setup {
            return;
        }

        self.clear_run_entities();
        self.phase = GamePhase::Setup;

        log::info!("run ended");
        self.events.push(SquadEvent::RunEnded);
    }

    /// Complete the run once the probe passes the far face of the
    /// furthest trigger plus a margin. Spawned units remain for
    /// inspection; the probe is despawned.
    fn check_run_complete(&mut self) {
        let Some((probe, probe_y)) = self
            .world
            .query::<(&Probe, &Position)>()
            .iter()
            .next()
            .map(|(entity, (_, position))| (entity, position.y))
        else {
            return;
        };

        let mut far_edge = self.manager.position.y;
        for &trigger in &self.triggers {
            let Ok(mut query) = self.world.query_one::<(&Position, &TriggerVolume)>(trigger)
            else {
                continue;
            };
            if let Some((position, volume)) = query.get() {
                far_edge = far_edge.max(position.y + volume.size.y / 2.0);
            }
        }

        if probe_y > far_edge + RUN_END_MARGIN {
            let _ = self.world.despawn(probe);
            self.phase = GamePhase::RunComplete;

            log::info!("probe passed the last trigger, run complete");
            self.events.push(SquadEvent::RunEnded);
        }
    }

    /// Despawn the probe and every spawned unit, clearing squad unit
    /// lists.
    fn clear_run_entities(&mut self) {
        let units: Vec<hecs::Entity> = self
            .world
            .query::<&UnitBody>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for unit in units {
            let _ = self.world.despawn(unit);
        }

        let probes: Vec<hecs::Entity> = self
            .world
            .query::<&Probe>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for probe in probes {
            let _ = self.world.despawn(probe);
        }

        for (_entity, spawned) in self.world.query_mut::<&mut SpawnedUnits>() {
            spawned.units.clear();
        }
    }

    // --- Lookup helpers ---

    fn find_trigger(&self, trigger_id: u32) -> Option<hecs::Entity> {
        self.triggers.iter().copied().find(|&trigger| {
            self.world
                .get::<&TriggerVolume>(trigger)
                .map(|volume| volume.id == trigger_id)
                .unwrap_or(false)
        })
    }

    fn find_squad(&self, squad_id: u32) -> Option<hecs::Entity> {
        self.world
            .query::<&SquadConfig>()
            .iter()
            .find(|(_, config)| config.id == squad_id)
            .map(|(entity, _)| entity)
    }

    fn roster(&self, trigger: hecs::Entity) -> Vec<hecs::Entity> {
        self.world
            .get::<&SquadRoster>(trigger)
            .map(|roster| roster.squads.clone())
            .unwrap_or_default()
    }

    /// Sequential display naming after any structural edit: triggers by
    /// manager order, squads numbered across all rosters.
    fn rename_all(&mut self) {
        let triggers = self.triggers.clone();

        for (index, &trigger) in triggers.iter().enumerate() {
            if let Ok(volume) = self.world.query_one_mut::<&mut TriggerVolume>(trigger) {
                volume.name = format!("Squad Trigger {index}");
            }
        }

        let mut count = 0usize;
        for &trigger in &triggers {
            for entity in self.roster(trigger) {
                if let Ok(config) = self.world.query_one_mut::<&mut SquadConfig>(entity) {
                    config.name = format!("Squad {count}");
                }
                count += 1;
            }
        }
    }
}
