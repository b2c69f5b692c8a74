use super::{despawn, ground_distance, random_ground_point};
use crate::domain::collision::collides;
use crate::domain::state::{FrameEvent, Hazard, HazardKind, HazardSnapshot, IdAllocator, Player};
use crate::domain::tuning::HazardTuning;
use glam::Vec3;
use rand::Rng;

pub fn spawn_cone<R: Rng>(
    hazards: &mut Vec<Hazard>,
    ids: &mut IdAllocator,
    tuning: &HazardTuning,
    half_size: f32,
    rng: &mut R,
) {
    hazards.push(Hazard {
        id: ids.next_id(),
        kind: HazardKind::Cone,
        position: random_ground_point(rng, half_size, tuning.drop_height),
        half_extents: tuning.cone_half_extents,
        alive: true,
    });
}

/// Drops a bomb away from the player when possible.
///
/// Returns false without spawning while the bomb model is not loaded.
pub fn spawn_bomb<R: Rng>(
    hazards: &mut Vec<Hazard>,
    ids: &mut IdAllocator,
    tuning: &HazardTuning,
    half_size: f32,
    player_position: Vec3,
    bomb_model_loaded: bool,
    rng: &mut R,
) -> bool {
    if !bomb_model_loaded {
        return false;
    }

    // Keep the last candidate if no far enough spot turns up.
    let mut position = random_ground_point(rng, half_size, tuning.drop_height);
    let mut attempts = 1;
    while ground_distance(position, player_position) < tuning.bomb_min_distance
        && attempts < tuning.bomb_placement_attempts
    {
        position = random_ground_point(rng, half_size, tuning.drop_height);
        attempts += 1;
    }

    hazards.push(Hazard {
        id: ids.next_id(),
        kind: HazardKind::Bomb,
        position,
        half_extents: tuning.bomb_half_extents,
        alive: true,
    });
    true
}

/// Lowers every hazard by one frame's fall; hazards below ground are removed.
pub fn fall(hazards: &mut [Hazard], tuning: &HazardTuning, events: &mut Vec<FrameEvent>) {
    for h in hazards.iter_mut().filter(|h| h.alive) {
        h.position.y -= tuning.fall_per_frame;
        if h.position.y < 0.0 {
            despawn(&mut h.alive, h.id, h.kind.into(), events);
        }
    }
}

/// First live hazard touching the player, consumed on contact.
pub fn strike_player(
    hazards: &mut [Hazard],
    player: &Player,
    events: &mut Vec<FrameEvent>,
) -> Option<HazardKind> {
    let hazard = hazards.iter_mut().find(|h| collides(&**h, player))?;
    despawn(&mut hazard.alive, hazard.id, hazard.kind.into(), events);
    Some(hazard.kind)
}

/// Landing cue: shrinks and darkens as the remaining fall height drops.
/// Returns `(scale, opacity)`.
pub fn landing_indicator(height: f32, tuning: &HazardTuning) -> (f32, f32) {
    let remaining = if tuning.drop_height > 0.0 {
        (height / tuning.drop_height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let scale = tuning.indicator_min_scale + (1.0 - tuning.indicator_min_scale) * remaining;
    let opacity = 0.2 + 0.6 * (1.0 - remaining);
    (scale, opacity)
}

pub fn snapshot(hazard: &Hazard, tuning: &HazardTuning) -> HazardSnapshot {
    let (indicator_scale, indicator_opacity) = landing_indicator(hazard.position.y, tuning);
    HazardSnapshot {
        id: hazard.id,
        kind: hazard.kind,
        position: hazard.position,
        indicator_scale,
        indicator_opacity,
    }
}
