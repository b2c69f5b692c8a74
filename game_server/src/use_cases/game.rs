use super::types::{GameEvent, SessionState};
use crate::domain::collision::collides;
use crate::domain::input::InputAdapter;
use crate::domain::schedule::{ScheduledEvent, Scheduler};
use crate::domain::state::{
    Ally, AllySnapshot, AssetKind, Collectible, Enemy, EntityKind, EntitySnapshot, FrameEvent,
    FrameSnapshot, GameFlags, Hazard, IdAllocator, Particle, ParticleSnapshot, Pickup, Player,
    PlayerSnapshot,
};
use crate::domain::systems::movement::{CameraRig, move_player};
use crate::domain::systems::tiles::TileField;
use crate::domain::systems::{allies, despawn, enemy, explosion, hazards, pickups, waves};
use crate::domain::tuning::Tuning;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{debug, info};

/// One player's game: every entity list, flag and timer, advanced a frame at a time.
pub struct GameSession {
    tuning: Tuning,
    rng: StdRng,
    ids: IdAllocator,
    input: InputAdapter,
    scheduler: Scheduler,
    tiles: TileField,
    camera: CameraRig,

    player: Player,
    collectibles: Vec<Collectible>,
    hazards: Vec<Hazard>,
    allies: Vec<Ally>,
    enemy: Option<Enemy>,
    pickups: Vec<Pickup>,
    particles: Vec<Particle>,

    score: u64,
    wave: u32,
    flags: GameFlags,
    first_wave_spawned: bool,
    bomb_model_loaded: bool,
    resync_requested: bool,

    elapsed: f32,
    explosion_started_at: f32,
    frame: u64,
    // Events produced since the last snapshot.
    events: Vec<FrameEvent>,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(tuning.player.placeholder_half_extents);
        let mut session = Self {
            rng: StdRng::seed_from_u64(seed),
            ids: IdAllocator::default(),
            input: InputAdapter::default(),
            scheduler: Scheduler::default(),
            tiles: TileField::new(seed),
            camera: CameraRig::default(),
            player,
            collectibles: Vec::new(),
            hazards: Vec::new(),
            allies: Vec::new(),
            enemy: None,
            pickups: Vec::new(),
            particles: Vec::new(),
            score: 0,
            wave: 1,
            flags: GameFlags::default(),
            first_wave_spawned: false,
            bomb_model_loaded: false,
            resync_requested: false,
            elapsed: 0.0,
            explosion_started_at: 0.0,
            frame: 0,
            events: Vec::new(),
            tuning,
        };

        let first_wave_delay = session.tuning.field.first_wave_delay;
        session
            .scheduler
            .schedule_at(first_wave_delay, ScheduledEvent::SpawnFirstWave);
        session.schedule_timers();
        session
    }

    // Hazard, ghost and pellet timers, relative to the current time.
    fn schedule_timers(&mut self) {
        let now = self.elapsed;
        self.scheduler
            .schedule_in(now, self.tuning.hazard.warmup, ScheduledEvent::HazardTick);
        self.scheduler
            .schedule_in(now, self.tuning.enemy.spawn_delay, ScheduledEvent::SpawnEnemy);
        self.scheduler
            .schedule_in(now, self.tuning.pickup.interval, ScheduledEvent::SpawnPickup);
    }

    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Input(input) => self.input.apply(input),
            GameEvent::AssetLoaded(AssetKind::PlayerModel) => {
                if !self.player.model_loaded {
                    self.player.model_loaded = true;
                    self.player.half_extents = self.tuning.player.model_half_extents;
                    self.player.position.y = self.player.half_extents.y;
                    debug!("player model loaded; placeholder retired");
                }
            }
            GameEvent::AssetLoaded(AssetKind::BombModel) => self.bomb_model_loaded = true,
            GameEvent::Resync => self.resync_requested = true,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.flags.game_over {
            SessionState::GameOver {
                score: self.score,
                wave: self.wave,
            }
        } else if self.flags.exploding {
            SessionState::Exploding
        } else {
            SessionState::Running
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn flags(&self) -> GameFlags {
        self.flags
    }

    /// Advances the game by one rendered frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) -> FrameSnapshot {
        self.frame += 1;
        self.elapsed += dt;

        // The explosion freezes everything else until it has played out.
        if self.flags.exploding {
            let since = self.elapsed - self.explosion_started_at;
            let running = explosion::advance(&mut self.particles, since, &self.tuning.explosion);
            if !running {
                self.flags.exploding = false;
                self.flags.game_over = true;
                self.events.push(FrameEvent::GameOver {
                    score: self.score,
                    wave: self.wave,
                });
                info!(score = self.score, wave = self.wave, "game over");
            }
            return self.snapshot();
        }

        if self.flags.game_over {
            if self.input.take_restart() {
                self.restart();
            }
            return self.snapshot();
        }

        // Restart only means something once the game is over.
        self.input.take_restart();

        let movement = self.input.movement();
        move_player(&mut self.player, movement, &self.tuning.player);
        let pan = self.input.take_pan();
        self.camera.apply_pan(pan, &self.tuning.player);

        self.tiles
            .ensure_around(self.player.position, &self.tuning.tile, &mut self.events);
        if self.input.take_interact() {
            let link = self
                .tiles
                .interact(self.player.position, &self.tuning.tile, &mut self.events);
            if let Some(link) = link {
                info!(website = %link.website, label = %link.label, "tile link activated");
            }
        }

        self.run_timers();
        self.advance_entities();
        self.resolve_collisions();
        self.sweep();

        self.snapshot()
    }

    fn run_timers(&mut self) {
        let now = self.elapsed;
        for event in self.scheduler.drain_due(now) {
            match event {
                ScheduledEvent::SpawnFirstWave => {
                    if !self.first_wave_spawned {
                        self.first_wave_spawned = true;
                        self.spawn_wave();
                    }
                }
                ScheduledEvent::HazardTick => {
                    let half_size = self.tuning.field.half_size;
                    hazards::spawn_cone(
                        &mut self.hazards,
                        &mut self.ids,
                        &self.tuning.hazard,
                        half_size,
                        &mut self.rng,
                    );
                    hazards::spawn_bomb(
                        &mut self.hazards,
                        &mut self.ids,
                        &self.tuning.hazard,
                        half_size,
                        self.player.position,
                        self.bomb_model_loaded,
                        &mut self.rng,
                    );
                    self.scheduler
                        .schedule_in(now, self.tuning.hazard.interval, ScheduledEvent::HazardTick);
                }
                ScheduledEvent::SpawnEnemy => {
                    if !self.flags.ghost_spawned {
                        let ghost = enemy::spawn_enemy(
                            &mut self.ids,
                            &self.tuning.enemy,
                            self.tuning.field.half_size,
                            self.player.position,
                        );
                        debug!(id = ghost.id.0, "ghost spawned");
                        self.enemy = Some(ghost);
                        self.flags.ghost_spawned = true;
                    }
                }
                ScheduledEvent::SpawnPickup => {
                    pickups::spawn_pickup(
                        &mut self.pickups,
                        &mut self.ids,
                        &self.tuning.pickup,
                        self.tuning.field.half_size,
                        self.flags.protection_active,
                        &mut self.rng,
                    );
                    self.scheduler
                        .schedule_in(now, self.tuning.pickup.interval, ScheduledEvent::SpawnPickup);
                }
                ScheduledEvent::ProtectionExpired => self.end_protection(),
            }
        }
    }

    fn advance_entities(&mut self) {
        hazards::fall(&mut self.hazards, &self.tuning.hazard, &mut self.events);
        pickups::bounce(&mut self.pickups, &self.tuning.pickup);
        if let Some(ghost) = self.enemy.as_mut() {
            enemy::pursue(ghost, self.player.position, &self.tuning.enemy);
        }
        allies::tick_flash(&mut self.allies);
        allies::steer(&mut self.allies, self.player.position, &self.tuning.ally);
    }

    fn resolve_collisions(&mut self) {
        for c in self.collectibles.iter_mut() {
            if collides(&self.player, c) {
                despawn(&mut c.alive, c.id, EntityKind::Collectible, &mut self.events);
                self.score += 1;
                self.events.push(FrameEvent::CollectiblePicked {
                    id: c.id,
                    score: self.score,
                });
            }
        }

        if self.first_wave_spawned && waves::is_cleared(&self.collectibles) {
            self.wave += 1;
            self.spawn_wave();
        }

        if let Some(kind) = hazards::strike_player(&mut self.hazards, &self.player, &mut self.events)
        {
            self.destroy_player(kind.into());
            return;
        }

        let mut collected_pickup = false;
        for p in self.pickups.iter_mut() {
            if collides(&self.player, p) {
                despawn(&mut p.alive, p.id, EntityKind::Pickup, &mut self.events);
                collected_pickup = true;
            }
        }
        if collected_pickup {
            self.start_protection();
        }

        let Some(ghost) = self.enemy.as_mut() else {
            return;
        };

        for ally in self.allies.iter_mut() {
            if collides(ally, ghost)
                && allies::register_hit(ally, &self.tuning.ally, &mut self.events)
            {
                enemy::push_away(ghost, ally.position, &self.tuning.enemy);
            }
        }

        if collides(&self.player, ghost) {
            if self.flags.protection_active {
                enemy::push_away(ghost, self.player.position, &self.tuning.enemy);
            } else {
                self.destroy_player(EntityKind::Enemy);
            }
        }
    }

    // Drops everything removed this frame from its list.
    fn sweep(&mut self) {
        self.collectibles.retain(|c| c.alive);
        self.hazards.retain(|h| h.alive);
        self.allies.retain(|a| a.alive);
        self.pickups.retain(|p| p.alive);
        if self.enemy.as_ref().is_some_and(|e| !e.alive) {
            self.enemy = None;
        }
    }

    fn spawn_wave(&mut self) {
        waves::spawn_wave(
            &mut self.collectibles,
            &mut self.player,
            self.wave,
            &mut self.ids,
            &self.tuning.field,
            &mut self.rng,
            &mut self.events,
        );
        info!(wave = self.wave, score = self.score, "wave started");
    }

    fn start_protection(&mut self) {
        self.flags.protection_active = true;
        if !self.flags.followers_spawned {
            allies::spawn_allies(
                &mut self.allies,
                &mut self.ids,
                &self.tuning.ally,
                self.player.position,
            );
            self.flags.followers_spawned = true;
        }
        self.scheduler.cancel(ScheduledEvent::ProtectionExpired);
        self.scheduler.schedule_in(
            self.elapsed,
            self.tuning.pickup.protection_duration,
            ScheduledEvent::ProtectionExpired,
        );
        self.events.push(FrameEvent::ProtectionStarted);
        debug!(allies = self.allies.len(), "protection started");
    }

    fn end_protection(&mut self) {
        self.flags.protection_active = false;
        self.flags.followers_spawned = false;
        for ally in self.allies.iter_mut() {
            despawn(&mut ally.alive, ally.id, EntityKind::Ally, &mut self.events);
        }
        self.events.push(FrameEvent::ProtectionEnded);
        debug!("protection ended");
    }

    fn destroy_player(&mut self, by: EntityKind) {
        self.player.alive = false;
        self.flags.exploding = true;
        self.explosion_started_at = self.elapsed;
        explosion::spawn_particles(
            &mut self.particles,
            self.player.position,
            &self.tuning.explosion,
            &mut self.rng,
        );
        self.events.push(FrameEvent::PlayerDestroyed { by });
        info!(?by, score = self.score, wave = self.wave, "player destroyed");
    }

    /// Back to the start-of-game state; the first wave appears immediately.
    pub fn restart(&mut self) {
        self.scheduler.clear();
        self.input.reset();
        self.collectibles.clear();
        self.hazards.clear();
        self.allies.clear();
        self.pickups.clear();
        self.particles.clear();
        self.enemy = None;

        self.score = 0;
        self.wave = 1;
        self.flags = GameFlags::default();
        self.elapsed = 0.0;
        self.explosion_started_at = 0.0;

        self.player.alive = true;
        self.player.heading = 0.0;
        self.player.reset_to_origin();

        self.events.push(FrameEvent::Restarted);
        self.first_wave_spawned = true;
        self.spawn_wave();
        self.schedule_timers();
        info!("game restarted");
    }

    fn snapshot(&mut self) -> FrameSnapshot {
        if std::mem::take(&mut self.resync_requested) {
            self.events
                .push(FrameEvent::TilesResynced(self.tiles.sorted_tiles()));
        }

        FrameSnapshot {
            frame: self.frame,
            elapsed: self.elapsed,
            score: self.score,
            wave: self.wave,
            flags: self.flags,
            player: PlayerSnapshot::from(&self.player),
            camera: self.camera.view(self.player.position, &self.tuning.player),
            collectibles: self.collectibles.iter().map(EntitySnapshot::from).collect(),
            hazards: self
                .hazards
                .iter()
                .map(|h| hazards::snapshot(h, &self.tuning.hazard))
                .collect(),
            allies: self.allies.iter().map(AllySnapshot::from).collect(),
            enemy: self.enemy.as_ref().map(EntitySnapshot::from),
            pickups: self.pickups.iter().map(EntitySnapshot::from).collect(),
            particles: self.particles.iter().map(ParticleSnapshot::from).collect(),
            events: std::mem::take(&mut self.events),
        }
    }
}

pub async fn world_task(
    mut input_rx: mpsc::Receiver<GameEvent>,
    frame_tx: broadcast::Sender<FrameSnapshot>,
    state_tx: watch::Sender<SessionState>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
    mut session: GameSession,
) {
    // Drive the fixed-step game loop at the configured tick rate.
    let mut interval = tokio::time::interval(tick_interval);
    let dt = tick_interval.as_secs_f32();

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                // Exit cleanly when the connection goes away.
                break;
            }
            _ = interval.tick() => {}
        }

        loop {
            match input_rx.try_recv() {
                Ok(ev) => session.handle_event(ev),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("input channel closed; world task exiting");
                    return;
                }
            }
        }

        let snapshot = session.step(dt);

        let state = session.state();
        state_tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });

        // No receivers just means nobody is watching this frame.
        let _ = frame_tx.send(snapshot);
    }
}
