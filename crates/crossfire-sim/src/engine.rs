//! Simulation engine: the tick driver of the combat core.
//!
//! `SimulationEngine` owns the hecs ECS world, processes session commands,
//! runs all systems and produces `SessionSnapshot`s. Completely headless
//! (no renderer or device dependency), enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crossfire_core::commands::SessionCommand;
use crossfire_core::constants::*;
use crossfire_core::enums::{FireMode, GamePhase};
use crossfire_core::error::{CollaboratorError, SimError};
use crossfire_core::events::CombatEvent;
use crossfire_core::input::InputSample;
use crossfire_core::state::{EnemyView, ScoreView, SessionSnapshot};
use crossfire_core::types::{CameraPose, EnemyId, SimTime};

use crate::roster;
use crate::scene::{RayQuery, SceneGeometry};
use crate::systems;
use crate::systems::hitscan::ShotOutcome;
use crate::world_setup;

/// A static scenery box in the starting arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Configuration for starting a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Seconds per tick.
    pub dt: f32,
    /// Player speed along each movement axis (units per second).
    pub player_speed: f32,
    /// Enemy pursuit speed (units per second).
    pub enemy_speed: f32,
    /// Mouse look sensitivity (degrees per count).
    pub look_sensitivity_deg: f32,
    /// Edge- or level-triggered fire.
    pub fire_mode: FireMode,
    /// Enter `GamePhase::Cleared` when the last enemy dies.
    pub end_when_cleared: bool,
    /// Spawn the enemy standing at the reference point (20, 0, 20).
    pub reference_enemy: bool,
    /// Additional enemies placed at random on a ring around the player.
    pub random_enemies: usize,
    /// Static scenery.
    pub obstacles: Vec<ObstacleConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dt: DT,
            player_speed: PLAYER_MOVE_SPEED,
            enemy_speed: ENEMY_SPEED,
            look_sensitivity_deg: LOOK_SENSITIVITY_DEG,
            fire_mode: FireMode::default(),
            end_when_cleared: false,
            reference_enemy: true,
            random_enemies: 0,
            obstacles: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Reject values that would make time run backwards or positions non-finite.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(invalid("dt", "a positive number of seconds", self.dt));
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(invalid("player_speed", "non-negative", self.player_speed));
        }
        if !(self.enemy_speed.is_finite() && self.enemy_speed >= 0.0) {
            return Err(invalid("enemy_speed", "non-negative", self.enemy_speed));
        }
        if !self.look_sensitivity_deg.is_finite() {
            return Err(invalid("look_sensitivity_deg", "finite", self.look_sensitivity_deg));
        }
        for obstacle in &self.obstacles {
            if !(obstacle.center.is_finite() && obstacle.half_extents.is_finite()) {
                return Err(SimError::InvalidConfig {
                    field: "obstacles",
                    expected: "finite",
                    value: format!("{obstacle:?}"),
                });
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, expected: &'static str, value: f32) -> SimError {
    SimError::InvalidConfig {
        field,
        expected,
        value: value.to_string(),
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    fire_mode: FireMode,
    fire_held: bool,
    rng: ChaCha8Rng,
    next_enemy_id: u32,
    command_queue: VecDeque<SessionCommand>,
    events: Vec<CombatEvent>,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new session: player, camera, starting enemies and scenery.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::Active,
            fire_mode: config.fire_mode,
            fire_held: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            score: ScoreView::default(),
            config,
        };
        engine.setup_arena()?;
        Ok(engine)
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one tick, resolving shots against the headless scene.
    pub fn tick(&mut self, input: &InputSample) -> Result<SessionSnapshot, CollaboratorError> {
        let Some(fire) = self.begin_tick(input) else {
            return Ok(self.snapshot());
        };
        if fire {
            let mut scene = SceneGeometry::capture(&self.world);
            self.shoot(&mut scene)?;
        }
        Ok(self.end_tick())
    }

    /// Advance one tick, resolving shots against an external ray query.
    ///
    /// A failing query aborts the tick before time advances; movement
    /// already applied this tick stays applied.
    pub fn tick_with<Q: RayQuery + ?Sized>(
        &mut self,
        input: &InputSample,
        query: &mut Q,
    ) -> Result<SessionSnapshot, CollaboratorError> {
        let Some(fire) = self.begin_tick(input) else {
            return Ok(self.snapshot());
        };
        if fire {
            self.shoot(query)?;
        }
        Ok(self.end_tick())
    }

    /// Add an enemy to the roster.
    pub fn spawn_enemy(&mut self, position: Vec3) -> Result<EnemyId, SimError> {
        if !position.is_finite() {
            return Err(SimError::NonFiniteSpawn(position));
        }
        let id = world_setup::allocate_enemy_id(&mut self.next_enemy_id);
        world_setup::spawn_enemy(&mut self.world, id, position, self.config.enemy_speed);
        self.record_spawn(id, position);
        if self.phase == GamePhase::Cleared {
            self.phase = GamePhase::Active;
        }
        Ok(id)
    }

    /// Add `count` enemies at random positions on a ring around the player.
    pub fn spawn_enemy_ring(&mut self, count: usize) -> Vec<EnemyId> {
        let center = self.player_position();
        let spawned = world_setup::spawn_enemy_ring(
            &mut self.world,
            &mut self.rng,
            &mut self.next_enemy_id,
            center,
            count,
            self.config.enemy_speed,
        );
        for &(id, position) in &spawned {
            self.record_spawn(id, position);
        }
        if !spawned.is_empty() && self.phase == GamePhase::Cleared {
            self.phase = GamePhase::Active;
        }
        spawned.into_iter().map(|(id, _)| id).collect()
    }

    /// Remove an enemy from the roster. Returns false if it was not a member.
    ///
    /// Emptying the roster this way counts as clearing it, same as a kill.
    pub fn remove_enemy(&mut self, id: EnemyId) -> bool {
        let removed = roster::remove_enemy(&mut self.world, id);
        if removed {
            log::info!("removed {id}");
            self.check_roster_cleared();
        }
        removed
    }

    /// All roster members, sorted by id.
    pub fn list_enemies(&self) -> Vec<EnemyView> {
        roster::list_enemies(&self.world)
    }

    /// Number of roster members.
    pub fn enemy_count(&self) -> usize {
        roster::enemy_count(&self.world)
    }

    pub fn player_position(&self) -> Vec3 {
        roster::player_position(&self.world)
    }

    pub fn camera_pose(&self) -> CameraPose {
        systems::camera::pose(&self.world)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn fire_mode(&self) -> FireMode {
        self.fire_mode
    }

    pub fn score(&self) -> ScoreView {
        self.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn setup_arena(&mut self) -> Result<(), SimError> {
        world_setup::spawn_player(&mut self.world, PLAYER_SPAWN);

        if self.config.reference_enemy {
            self.spawn_enemy(ENEMY_DEFAULT_SPAWN)?;
        }
        if self.config.random_enemies > 0 {
            self.spawn_enemy_ring(self.config.random_enemies);
        }
        for obstacle in self.config.obstacles.clone() {
            world_setup::spawn_obstacle(&mut self.world, obstacle.center, obstacle.half_extents);
        }

        log::info!(
            "arena ready: {} enemies, {} obstacles",
            self.enemy_count(),
            self.config.obstacles.len()
        );
        Ok(())
    }

    fn record_spawn(&mut self, id: EnemyId, position: Vec3) {
        log::info!("spawned {id} at {position}");
        self.score.enemies_spawned += 1;
        self.events.push(CombatEvent::EnemySpawned {
            enemy: id,
            position,
        });
    }

    /// Commands, fire edge tracking and the movement phase.
    /// Returns `None` when the session is not active, otherwise whether to fire.
    fn begin_tick(&mut self, input: &InputSample) -> Option<bool> {
        self.process_commands();

        // Track the button even while paused so resuming with it held does not fire.
        let fire = self.fire_trigger(input.fire_pressed);
        if self.phase != GamePhase::Active {
            return None;
        }

        self.run_movement(input);
        Some(fire)
    }

    fn end_tick(&mut self) -> SessionSnapshot {
        self.time.advance(self.config.dt);
        self.snapshot()
    }

    fn snapshot(&mut self) -> SessionSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.fire_mode,
            events,
            &self.score,
        )
    }

    /// Whether this tick's sample pulls the trigger under the current fire mode.
    fn fire_trigger(&mut self, pressed: bool) -> bool {
        let was_held = std::mem::replace(&mut self.fire_held, pressed);
        match self.fire_mode {
            FireMode::Edge => pressed && !was_held,
            FireMode::Level => pressed,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single session command.
    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            SessionCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            SessionCommand::SetFireMode { mode } => {
                self.fire_mode = mode;
            }
            SessionCommand::SpawnEnemy { position } => {
                if let Err(err) = self.spawn_enemy(position) {
                    log::warn!("ignoring spawn command: {err}");
                }
            }
        }
    }

    /// Movement phase: player, camera, then pursuit.
    fn run_movement(&mut self, input: &InputSample) {
        // 1. Player locomotion
        systems::player_movement::run(
            &mut self.world,
            input.move_axes,
            self.config.player_speed,
            self.config.dt,
        );
        // 2. Mouse look
        systems::camera::run(
            &mut self.world,
            input.look_delta,
            self.config.look_sensitivity_deg,
        );
        // 3. Pursuit steering
        systems::pursuit::run(&mut self.world, self.config.dt);
    }

    /// Fire one hitscan shot from the camera and book the outcome.
    fn shoot<Q: RayQuery + ?Sized>(&mut self, query: &mut Q) -> Result<(), CollaboratorError> {
        let pose = self.camera_pose();
        let outcome = match systems::hitscan::fire(query, pose, &mut self.world) {
            Ok(outcome) => outcome,
            Err(err) => {
                // The press was not spent: a button still held on the retry tick fires.
                self.fire_held = false;
                return Err(err);
            }
        };

        self.score.shots_fired += 1;
        self.events.push(CombatEvent::ShotFired {
            origin: pose.position,
            direction: pose.forward,
        });

        match outcome {
            ShotOutcome::Hit { enemy, distance } => {
                log::info!("hit {enemy} at {distance:.2}");
                self.score.kills += 1;
                self.events.push(CombatEvent::EnemyHit { enemy, distance });
                self.check_roster_cleared();
            }
            ShotOutcome::Miss { blocked_by } => {
                log::debug!("miss (blocked by {blocked_by:?})");
                self.score.misses += 1;
                self.events.push(CombatEvent::ShotMissed { blocked_by });
            }
        }

        Ok(())
    }

    /// Announce an empty roster and end the session if configured to.
    fn check_roster_cleared(&mut self) {
        if self.enemy_count() != 0 {
            return;
        }
        log::info!("roster cleared at tick {}", self.time.tick);
        self.events.push(CombatEvent::RosterCleared);
        if self.config.end_when_cleared {
            self.phase = GamePhase::Cleared;
        }
    }
}
