// Domain-level simulation entities, flags and per-frame snapshot types.

use crate::domain::collision::{Aabb, Collider};
use crate::domain::tuning::TileLink;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Hands out entity ids for one session.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        self.next = self.next.wrapping_add(1);
        EntityId(self.next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Collectible,
    Cone,
    Bomb,
    Ally,
    Enemy,
    Pickup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Cone,
    Bomb,
}

impl From<HazardKind> for EntityKind {
    fn from(kind: HazardKind) -> Self {
        match kind {
            HazardKind::Cone => EntityKind::Cone,
            HazardKind::Bomb => EntityKind::Bomb,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    /// Yaw in radians, `atan2(x, z)` of the last movement direction.
    pub heading: f32,
    pub alive: bool,
    /// False while the placeholder cube stands in for the car model.
    pub model_loaded: bool,
    pub half_extents: Vec3,
}

impl Player {
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            position: Vec3::new(0.0, half_extents.y, 0.0),
            heading: 0.0,
            alive: true,
            model_loaded: false,
            half_extents,
        }
    }

    pub fn reset_to_origin(&mut self) {
        self.position = Vec3::new(0.0, self.half_extents.y, 0.0);
    }
}

#[derive(Debug, Clone)]
pub struct Collectible {
    pub id: EntityId,
    pub position: Vec3,
    pub half_extents: Vec3,
    pub alive: bool,
}

#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: EntityId,
    pub kind: HazardKind,
    pub position: Vec3,
    pub half_extents: Vec3,
    pub alive: bool,
}

#[derive(Debug, Clone)]
pub struct Ally {
    pub id: EntityId,
    pub position: Vec3,
    pub half_extents: Vec3,
    pub alive: bool,
    pub hits: u32,
    /// Frames left of the hit flash; contacts are ignored while it runs.
    pub flash_frames: u32,
    pub follow_distance: f32,
}

impl Ally {
    pub fn is_flashing(&self) -> bool {
        self.flash_frames > 0
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Vec3,
    pub half_extents: Vec3,
    pub alive: bool,
}

#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: EntityId,
    pub position: Vec3,
    pub half_extents: Vec3,
    pub alive: bool,
    pub base_y: f32,
    pub bounce_phase: f32,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub coord: (i32, i32),
    pub color: u32,
    pub lit: bool,
    pub link: Option<TileLink>,
}

macro_rules! impl_collider {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Collider for $ty {
                fn aabb(&self) -> Aabb {
                    Aabb::from_center(self.position, self.half_extents)
                }

                fn is_alive(&self) -> bool {
                    self.alive
                }
            }
        )*
    };
}

impl_collider!(Player, Collectible, Hazard, Ally, Enemy, Pickup);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameFlags {
    pub game_over: bool,
    pub protection_active: bool,
    pub followers_spawned: bool,
    pub ghost_spawned: bool,
    /// The death explosion is playing; everything else is frozen.
    pub exploding: bool,
}

/// Assets the render host loads asynchronously and reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    PlayerModel,
    BombModel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    WaveStarted { wave: u32, collectibles: u32 },
    CollectiblePicked { id: EntityId, score: u64 },
    Despawned { id: EntityId, kind: EntityKind },
    PlayerDestroyed { by: EntityKind },
    GameOver { score: u64, wave: u32 },
    ProtectionStarted,
    ProtectionEnded,
    AllyHit { id: EntityId, hits: u32 },
    TileSpawned(Tile),
    TileChanged(Tile),
    TileActivated(TileLink),
    Restarted,
    /// Every tile the field holds, sent after the render host fell behind.
    TilesResynced(Vec<Tile>),
}

#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    pub position: Vec3,
    pub heading: f32,
    pub alive: bool,
    pub placeholder: bool,
}

#[derive(Debug, Clone)]
pub struct CameraSnapshot {
    pub position: Vec3,
    pub target: Vec3,
}

#[derive(Debug, Clone)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub position: Vec3,
}

#[derive(Debug, Clone)]
pub struct HazardSnapshot {
    pub id: EntityId,
    pub kind: HazardKind,
    pub position: Vec3,
    /// Ground indicator size relative to full size.
    pub indicator_scale: f32,
    pub indicator_opacity: f32,
}

#[derive(Debug, Clone)]
pub struct AllySnapshot {
    pub id: EntityId,
    pub position: Vec3,
    pub hits: u32,
    pub flashing: bool,
}

#[derive(Debug, Clone)]
pub struct ParticleSnapshot {
    pub position: Vec3,
    pub opacity: f32,
}

/// Everything the render host needs to draw one frame.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub elapsed: f32,
    pub score: u64,
    pub wave: u32,
    pub flags: GameFlags,
    pub player: PlayerSnapshot,
    pub camera: CameraSnapshot,
    pub collectibles: Vec<EntitySnapshot>,
    pub hazards: Vec<HazardSnapshot>,
    pub allies: Vec<AllySnapshot>,
    pub enemy: Option<EntitySnapshot>,
    pub pickups: Vec<EntitySnapshot>,
    pub particles: Vec<ParticleSnapshot>,
    pub events: Vec<FrameEvent>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            position: p.position,
            heading: p.heading,
            alive: p.alive,
            placeholder: !p.model_loaded,
        }
    }
}

impl From<&Collectible> for EntitySnapshot {
    fn from(c: &Collectible) -> Self {
        Self {
            id: c.id,
            position: c.position,
        }
    }
}

impl From<&Enemy> for EntitySnapshot {
    fn from(e: &Enemy) -> Self {
        Self {
            id: e.id,
            position: e.position,
        }
    }
}

impl From<&Pickup> for EntitySnapshot {
    fn from(p: &Pickup) -> Self {
        Self {
            id: p.id,
            position: p.position,
        }
    }
}

impl From<&Ally> for AllySnapshot {
    fn from(a: &Ally) -> Self {
        Self {
            id: a.id,
            position: a.position,
            hits: a.hits,
            flashing: a.is_flashing(),
        }
    }
}

impl From<&Particle> for ParticleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position,
            opacity: p.opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ids = IdAllocator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(b > a);
    }

    #[test]
    fn player_rests_on_the_ground() {
        let mut p = Player::new(Vec3::splat(0.5));
        assert_eq!(p.position, Vec3::new(0.0, 0.5, 0.0));

        p.position = Vec3::new(4.0, 0.5, -2.0);
        p.reset_to_origin();
        assert_eq!(p.position, Vec3::new(0.0, 0.5, 0.0));
    }
}
