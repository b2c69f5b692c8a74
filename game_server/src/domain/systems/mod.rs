// Per-frame gameplay systems operating on the session's entity lists.

pub mod allies;
pub mod enemy;
pub mod explosion;
pub mod hazards;
pub mod movement;
pub mod pickups;
pub mod tiles;
pub mod waves;

use crate::domain::state::{EntityId, EntityKind, FrameEvent};
use glam::Vec3;
use rand::Rng;

/// Marks an entity dead and reports it; a dead entity is never reported twice.
pub(crate) fn despawn(
    alive: &mut bool,
    id: EntityId,
    kind: EntityKind,
    events: &mut Vec<FrameEvent>,
) {
    if *alive {
        *alive = false;
        events.push(FrameEvent::Despawned { id, kind });
    }
}

/// Random point on the ground plane inside `[-half_size, half_size]`, at `height`.
pub(crate) fn random_ground_point<R: Rng>(rng: &mut R, half_size: f32, height: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-half_size..=half_size),
        height,
        rng.gen_range(-half_size..=half_size),
    )
}

/// Horizontal distance between two points, ignoring height.
pub(crate) fn ground_distance(a: Vec3, b: Vec3) -> f32 {
    (a.x - b.x).hypot(a.z - b.z)
}
