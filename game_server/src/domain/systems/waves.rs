use super::{despawn, random_ground_point};
use crate::domain::state::{Collectible, EntityKind, FrameEvent, IdAllocator, Player};
use crate::domain::tuning::FieldTuning;
use rand::Rng;

/// Replaces any leftover collectibles with a fresh batch of `per_wave * wave`
/// and puts the player back at the origin.
pub fn spawn_wave<R: Rng>(
    collectibles: &mut Vec<Collectible>,
    player: &mut Player,
    wave: u32,
    ids: &mut IdAllocator,
    field: &FieldTuning,
    rng: &mut R,
    events: &mut Vec<FrameEvent>,
) {
    for c in collectibles.iter_mut() {
        despawn(&mut c.alive, c.id, EntityKind::Collectible, events);
    }
    collectibles.clear();

    let count = field.collectibles_per_wave.saturating_mul(wave);
    collectibles.reserve(count as usize);
    for _ in 0..count {
        collectibles.push(Collectible {
            id: ids.next_id(),
            position: random_ground_point(rng, field.half_size, field.collectible_height),
            half_extents: field.collectible_half_extents,
            alive: true,
        });
    }

    player.reset_to_origin();
    events.push(FrameEvent::WaveStarted {
        wave,
        collectibles: count,
    });
}

/// True once every collectible of the current wave has been picked up.
pub fn is_cleared(collectibles: &[Collectible]) -> bool {
    collectibles.iter().all(|c| !c.alive)
}
