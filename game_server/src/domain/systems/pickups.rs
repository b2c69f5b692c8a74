use super::random_ground_point;
use crate::domain::state::{IdAllocator, Pickup};
use crate::domain::tuning::PickupTuning;
use rand::Rng;

/// Places a power pellet unless one is already out or protection is running.
pub fn spawn_pickup<R: Rng>(
    pickups: &mut Vec<Pickup>,
    ids: &mut IdAllocator,
    tuning: &PickupTuning,
    half_size: f32,
    protection_active: bool,
    rng: &mut R,
) -> bool {
    if protection_active || pickups.iter().any(|p| p.alive) {
        return false;
    }

    pickups.push(Pickup {
        id: ids.next_id(),
        position: random_ground_point(rng, half_size, tuning.height),
        half_extents: tuning.half_extents,
        alive: true,
        base_y: tuning.height,
        bounce_phase: 0.0,
    });
    true
}

pub fn bounce(pickups: &mut [Pickup], tuning: &PickupTuning) {
    for p in pickups.iter_mut().filter(|p| p.alive) {
        p.bounce_phase = (p.bounce_phase + tuning.bounce_speed) % std::f32::consts::TAU;
        p.position.y = p.base_y + tuning.bounce_amplitude * p.bounce_phase.sin();
    }
}
