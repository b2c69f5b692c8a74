// Wire protocol DTOs and conversions for the render host WebSocket.

use crate::domain::input::{InputEvent, Key};
use crate::domain::state::{
    AllySnapshot, CameraSnapshot, EntityKind, EntitySnapshot, FrameEvent, FrameSnapshot,
    GameFlags, HazardKind, HazardSnapshot, ParticleSnapshot, PlayerSnapshot, Tile,
};
use crate::domain::tuning::TileLink;
use crate::domain::AssetKind;
use crate::interface_adapters::clients::leaderboard::LeaderboardEntry;
use crate::use_cases::{GameEvent, SessionState};
use serde::{Deserialize, Serialize};

/// Messages the server sends to the render host over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Session id assigned after Join is accepted.
    Identity { session_id: String },
    // Everything needed to draw one frame.
    Frame(FrameDto),
    // Running / exploding / game over transitions.
    SessionState(SessionStateDto),
    // Top scores, pushed at join and after a game-over submission.
    Leaderboard(LeaderboardDto),
}

/// Messages the render host sends to the server over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // Initial handshake; the name is only needed for leaderboard submission.
    Join(JoinPayload),
    KeyDown { code: String },
    KeyUp { code: String },
    Joystick { dx: f32, dy: f32, radius: f32 },
    JoystickReleased,
    // On-screen interact button.
    Interact,
    Pan { dx: f32, dy: f32 },
    AssetLoaded { asset: AssetDto },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinPayload {
    #[serde(default)]
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetDto {
    PlayerModel,
    BombModel,
}

impl From<AssetDto> for AssetKind {
    fn from(asset: AssetDto) -> Self {
        match asset {
            AssetDto::PlayerModel => AssetKind::PlayerModel,
            AssetDto::BombModel => AssetKind::BombModel,
        }
    }
}

impl ClientMessage {
    /// Game input carried by this message, if any. Unknown key codes map to `None`.
    pub fn into_game_event(self) -> Option<GameEvent> {
        let input = match self {
            ClientMessage::Join(_) => return None,
            ClientMessage::KeyDown { code } => InputEvent::KeyDown(Key::from_code(&code)?),
            ClientMessage::KeyUp { code } => InputEvent::KeyUp(Key::from_code(&code)?),
            ClientMessage::Joystick { dx, dy, radius } => InputEvent::Joystick { dx, dy, radius },
            ClientMessage::JoystickReleased => InputEvent::JoystickReleased,
            ClientMessage::Interact => InputEvent::InteractButton,
            ClientMessage::Pan { dx, dy } => InputEvent::Pan { dx, dy },
            ClientMessage::AssetLoaded { asset } => {
                return Some(GameEvent::AssetLoaded(asset.into()));
            }
        };
        Some(GameEvent::Input(input))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state")]
pub enum SessionStateDto {
    Running,
    Exploding,
    GameOver { score: u64, wave: u32 },
}

impl From<SessionState> for SessionStateDto {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Running => SessionStateDto::Running,
            SessionState::Exploding => SessionStateDto::Exploding,
            SessionState::GameOver { score, wave } => SessionStateDto::GameOver { score, wave },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardDto {
    pub entries: Vec<LeaderboardEntryDto>,
    // 1-based rank of this session's submission when it made the list.
    pub player_position: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntryDto {
    pub player_name: String,
    pub score: u64,
    pub wave: u32,
}

impl From<&LeaderboardEntry> for LeaderboardEntryDto {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            player_name: entry.player_name.clone(),
            score: entry.score,
            wave: entry.wave,
        }
    }
}

/// Snapshot of the session sent once per tick.
#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub frame: u64,
    pub elapsed: f32,
    pub score: u64,
    pub wave: u32,
    pub flags: FlagsDto,
    pub player: PlayerDto,
    pub camera: CameraDto,
    pub collectibles: Vec<EntityDto>,
    pub hazards: Vec<HazardDto>,
    pub allies: Vec<AllyDto>,
    pub enemy: Option<EntityDto>,
    pub pickups: Vec<EntityDto>,
    pub particles: Vec<ParticleDto>,
    pub events: Vec<FrameEventDto>,
}

impl From<FrameSnapshot> for FrameDto {
    fn from(snapshot: FrameSnapshot) -> Self {
        Self {
            frame: snapshot.frame,
            elapsed: snapshot.elapsed,
            score: snapshot.score,
            wave: snapshot.wave,
            flags: snapshot.flags.into(),
            player: (&snapshot.player).into(),
            camera: (&snapshot.camera).into(),
            collectibles: snapshot.collectibles.iter().map(EntityDto::from).collect(),
            hazards: snapshot.hazards.iter().map(HazardDto::from).collect(),
            allies: snapshot.allies.iter().map(AllyDto::from).collect(),
            enemy: snapshot.enemy.as_ref().map(EntityDto::from),
            pickups: snapshot.pickups.iter().map(EntityDto::from).collect(),
            particles: snapshot.particles.iter().map(ParticleDto::from).collect(),
            events: snapshot.events.into_iter().map(FrameEventDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlagsDto {
    pub game_over: bool,
    pub protection_active: bool,
    pub followers_spawned: bool,
    pub ghost_spawned: bool,
    pub exploding: bool,
}

impl From<GameFlags> for FlagsDto {
    fn from(flags: GameFlags) -> Self {
        Self {
            game_over: flags.game_over,
            protection_active: flags.protection_active,
            followers_spawned: flags.followers_spawned,
            ghost_spawned: flags.ghost_spawned,
            exploding: flags.exploding,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub position: [f32; 3],
    pub heading: f32,
    pub alive: bool,
    // The render host draws a cube until the car model is loaded.
    pub placeholder: bool,
}

impl From<&PlayerSnapshot> for PlayerDto {
    fn from(player: &PlayerSnapshot) -> Self {
        Self {
            position: player.position.to_array(),
            heading: player.heading,
            alive: player.alive,
            placeholder: player.placeholder,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CameraDto {
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl From<&CameraSnapshot> for CameraDto {
    fn from(camera: &CameraSnapshot) -> Self {
        Self {
            position: camera.position.to_array(),
            target: camera.target.to_array(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityDto {
    pub id: u64,
    pub position: [f32; 3],
}

impl From<&EntitySnapshot> for EntityDto {
    fn from(entity: &EntitySnapshot) -> Self {
        Self {
            id: entity.id.0,
            position: entity.position.to_array(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HazardDto {
    pub id: u64,
    pub kind: EntityKindDto,
    pub position: [f32; 3],
    pub indicator_scale: f32,
    pub indicator_opacity: f32,
}

impl From<&HazardSnapshot> for HazardDto {
    fn from(hazard: &HazardSnapshot) -> Self {
        let kind = match hazard.kind {
            HazardKind::Cone => EntityKindDto::Cone,
            HazardKind::Bomb => EntityKindDto::Bomb,
        };
        Self {
            id: hazard.id.0,
            kind,
            position: hazard.position.to_array(),
            indicator_scale: hazard.indicator_scale,
            indicator_opacity: hazard.indicator_opacity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AllyDto {
    pub id: u64,
    pub position: [f32; 3],
    pub hits: u32,
    pub flashing: bool,
}

impl From<&AllySnapshot> for AllyDto {
    fn from(ally: &AllySnapshot) -> Self {
        Self {
            id: ally.id.0,
            position: ally.position.to_array(),
            hits: ally.hits,
            flashing: ally.flashing,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleDto {
    pub position: [f32; 3],
    pub opacity: f32,
}

impl From<&ParticleSnapshot> for ParticleDto {
    fn from(particle: &ParticleSnapshot) -> Self {
        Self {
            position: particle.position.to_array(),
            opacity: particle.opacity,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKindDto {
    Collectible,
    Cone,
    Bomb,
    Ally,
    Enemy,
    Pickup,
}

impl From<EntityKind> for EntityKindDto {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Collectible => EntityKindDto::Collectible,
            EntityKind::Cone => EntityKindDto::Cone,
            EntityKind::Bomb => EntityKindDto::Bomb,
            EntityKind::Ally => EntityKindDto::Ally,
            EntityKind::Enemy => EntityKindDto::Enemy,
            EntityKind::Pickup => EntityKindDto::Pickup,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TileDto {
    pub x: i32,
    pub z: i32,
    pub color: u32,
    pub lit: bool,
    pub link: Option<TileLinkDto>,
}

impl From<Tile> for TileDto {
    fn from(tile: Tile) -> Self {
        Self {
            x: tile.coord.0,
            z: tile.coord.1,
            color: tile.color,
            lit: tile.lit,
            link: tile.link.map(TileLinkDto::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TileLinkDto {
    pub website: String,
    pub label: String,
}

impl From<TileLink> for TileLinkDto {
    fn from(link: TileLink) -> Self {
        Self {
            website: link.website,
            label: link.label,
        }
    }
}

/// One-off things that happened during the frame, in order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum FrameEventDto {
    WaveStarted { wave: u32, collectibles: u32 },
    CollectiblePicked { id: u64, score: u64 },
    Despawned { id: u64, kind: EntityKindDto },
    PlayerDestroyed { by: EntityKindDto },
    GameOver { score: u64, wave: u32 },
    ProtectionStarted,
    ProtectionEnded,
    AllyHit { id: u64, hits: u32 },
    TileSpawned(TileDto),
    TileChanged(TileDto),
    // The render host opens the link; the server never does.
    TileActivated(TileLinkDto),
    Restarted,
    // Full tile field; replaces whatever the render host had.
    TilesResynced(Vec<TileDto>),
}

impl From<FrameEvent> for FrameEventDto {
    fn from(event: FrameEvent) -> Self {
        match event {
            FrameEvent::WaveStarted { wave, collectibles } => {
                FrameEventDto::WaveStarted { wave, collectibles }
            }
            FrameEvent::CollectiblePicked { id, score } => {
                FrameEventDto::CollectiblePicked { id: id.0, score }
            }
            FrameEvent::Despawned { id, kind } => FrameEventDto::Despawned {
                id: id.0,
                kind: kind.into(),
            },
            FrameEvent::PlayerDestroyed { by } => FrameEventDto::PlayerDestroyed { by: by.into() },
            FrameEvent::GameOver { score, wave } => FrameEventDto::GameOver { score, wave },
            FrameEvent::ProtectionStarted => FrameEventDto::ProtectionStarted,
            FrameEvent::ProtectionEnded => FrameEventDto::ProtectionEnded,
            FrameEvent::AllyHit { id, hits } => FrameEventDto::AllyHit { id: id.0, hits },
            FrameEvent::TileSpawned(tile) => FrameEventDto::TileSpawned(tile.into()),
            FrameEvent::TileChanged(tile) => FrameEventDto::TileChanged(tile.into()),
            FrameEvent::TileActivated(link) => FrameEventDto::TileActivated(link.into()),
            FrameEvent::Restarted => FrameEventDto::Restarted,
            FrameEvent::TilesResynced(tiles) => {
                FrameEventDto::TilesResynced(tiles.into_iter().map(TileDto::from).collect())
            }
        }
    }
}
