// Gameplay tuning, kept apart from runtime/server configuration.

pub mod ally;
pub mod enemy;
pub mod explosion;
pub mod field;
pub mod hazard;
pub mod pickup;
pub mod player;
pub mod tile;

pub use ally::AllyTuning;
pub use enemy::EnemyTuning;
pub use explosion::ExplosionTuning;
pub use field::FieldTuning;
pub use hazard::HazardTuning;
pub use pickup::PickupTuning;
pub use player::PlayerTuning;
pub use tile::{TileLink, TileTuning};

/// Every tuning table used by a game session.
#[derive(Debug, Clone, Default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub field: FieldTuning,
    pub hazard: HazardTuning,
    pub enemy: EnemyTuning,
    pub ally: AllyTuning,
    pub pickup: PickupTuning,
    pub explosion: ExplosionTuning,
    pub tile: TileTuning,
}
