use super::despawn;
use crate::domain::state::{Ally, EntityKind, FrameEvent, IdAllocator};
use crate::domain::tuning::AllyTuning;
use glam::Vec3;

/// Spawns the escort in a ring around the player, each with its own follow distance.
pub fn spawn_allies(
    allies: &mut Vec<Ally>,
    ids: &mut IdAllocator,
    tuning: &AllyTuning,
    player_position: Vec3,
) {
    for i in 0..tuning.count {
        let follow_distance = tuning.follow_distance + tuning.follow_stagger * i as f32;
        let angle = std::f32::consts::TAU * i as f32 / tuning.count.max(1) as f32;
        let offset = Vec3::new(angle.cos(), 0.0, angle.sin()) * follow_distance;
        allies.push(Ally {
            id: ids.next_id(),
            position: Vec3::new(
                player_position.x + offset.x,
                tuning.height,
                player_position.z + offset.z,
            ),
            half_extents: tuning.half_extents,
            alive: true,
            hits: 0,
            flash_frames: 0,
            follow_distance,
        });
    }
}

/// One steering step: attraction toward the player plus pairwise separation.
///
/// All steering vectors are computed from the positions at the start of the
/// step and then applied together.
pub fn steer(allies: &mut [Ally], player_position: Vec3, tuning: &AllyTuning) {
    let positions: Vec<(Vec3, bool)> = allies.iter().map(|a| (a.position, a.alive)).collect();

    for (i, ally) in allies.iter_mut().enumerate() {
        if !ally.alive {
            continue;
        }
        let attraction = attraction(ally.position, ally.follow_distance, player_position, tuning);
        let separation = separation(i, &positions, tuning);

        ally.position += attraction + separation;
        ally.position.y = tuning.height;
    }
}

fn attraction(position: Vec3, follow_distance: f32, player: Vec3, tuning: &AllyTuning) -> Vec3 {
    let to_player = Vec3::new(player.x - position.x, 0.0, player.z - position.z);
    let distance = to_player.length();
    if distance <= follow_distance {
        return Vec3::ZERO;
    }
    // Never overshoot the follow ring.
    to_player / distance * tuning.follow_speed.min(distance - follow_distance)
}

fn separation(index: usize, positions: &[(Vec3, bool)], tuning: &AllyTuning) -> Vec3 {
    let (me, _) = positions[index];
    let mut push = Vec3::ZERO;

    for (j, (other, alive)) in positions.iter().enumerate() {
        if j == index || !alive {
            continue;
        }
        let away = Vec3::new(me.x - other.x, 0.0, me.z - other.z);
        let distance = away.length();
        if distance >= tuning.separation_radius {
            continue;
        }
        // Coincident allies split along a direction derived from their order.
        let dir = away.try_normalize().unwrap_or_else(|| {
            let angle = if index < j { 0.0 } else { std::f32::consts::PI };
            Vec3::new(angle.cos(), 0.0, angle.sin())
        });
        let overlap = (tuning.separation_radius - distance) / tuning.separation_radius;
        push += dir * overlap * tuning.separation_strength;
    }

    push
}

/// Counts one enemy contact unless the ally is still flashing from the last one.
///
/// Returns true if the contact counted. The ally is removed when it reaches
/// `max_hits`.
pub fn register_hit(ally: &mut Ally, tuning: &AllyTuning, events: &mut Vec<FrameEvent>) -> bool {
    if !ally.alive || ally.is_flashing() {
        return false;
    }

    ally.hits += 1;
    ally.flash_frames = tuning.flash_frames;
    events.push(FrameEvent::AllyHit {
        id: ally.id,
        hits: ally.hits,
    });

    if ally.hits >= tuning.max_hits {
        despawn(&mut ally.alive, ally.id, EntityKind::Ally, events);
    }
    true
}

pub fn tick_flash(allies: &mut [Ally]) {
    for ally in allies.iter_mut() {
        ally.flash_frames = ally.flash_frames.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escort(player: Vec3) -> (Vec<Ally>, AllyTuning) {
        let tuning = AllyTuning::default();
        let mut ids = IdAllocator::default();
        let mut allies = Vec::new();
        spawn_allies(&mut allies, &mut ids, &tuning, player);
        (allies, tuning)
    }

    #[test]
    fn follow_distances_are_staggered() {
        let (allies, tuning) = escort(Vec3::ZERO);
        assert_eq!(allies.len(), tuning.count);
        assert_eq!(allies[0].follow_distance, 1.5);
        assert!((allies[1].follow_distance - 2.3).abs() < 1e-6);
        assert!((allies[2].follow_distance - 3.1).abs() < 1e-6);
    }

    #[test]
    fn far_ally_moves_toward_player() {
        let (mut allies, tuning) = escort(Vec3::ZERO);
        allies.truncate(1);
        allies[0].position = Vec3::new(10.0, tuning.height, 0.0);

        steer(&mut allies, Vec3::ZERO, &tuning);

        assert!((allies[0].position.x - (10.0 - tuning.follow_speed)).abs() < 1e-5);
    }

    #[test]
    fn ally_inside_follow_distance_stays_put() {
        let (mut allies, tuning) = escort(Vec3::ZERO);
        allies.truncate(1);
        allies[0].position = Vec3::new(1.0, tuning.height, 0.0);

        steer(&mut allies, Vec3::ZERO, &tuning);

        assert_eq!(allies[0].position, Vec3::new(1.0, tuning.height, 0.0));
    }

    #[test]
    fn close_allies_push_apart() {
        let (mut allies, tuning) = escort(Vec3::ZERO);
        allies.truncate(2);
        // Both inside their follow distance so only separation acts.
        allies[0].position = Vec3::new(0.2, tuning.height, 0.0);
        allies[1].position = Vec3::new(-0.2, tuning.height, 0.0);

        steer(&mut allies, Vec3::ZERO, &tuning);

        assert!(allies[0].position.x > 0.2);
        assert!(allies[1].position.x < -0.2);
    }

    #[test]
    fn coincident_allies_still_separate() {
        let (mut allies, tuning) = escort(Vec3::ZERO);
        allies.truncate(2);
        allies[0].position = Vec3::new(0.5, tuning.height, 0.0);
        allies[1].position = Vec3::new(0.5, tuning.height, 0.0);

        steer(&mut allies, Vec3::ZERO, &tuning);

        assert!(allies[0].position.distance(allies[1].position) > 0.0);
    }

    #[test]
    fn hits_count_once_per_contact_and_remove_at_max() {
        let (mut allies, tuning) = escort(Vec3::ZERO);
        let ally = &mut allies[0];
        let mut events = Vec::new();

        for expected in 1..tuning.max_hits {
            assert!(register_hit(ally, &tuning, &mut events));
            assert_eq!(ally.hits, expected);
            assert!(ally.alive, "removed before reaching max hits");

            // Contacts during the flash do not count.
            assert!(!register_hit(ally, &tuning, &mut events));
            assert_eq!(ally.hits, expected);

            for _ in 0..tuning.flash_frames {
                tick_flash(std::slice::from_mut(ally));
            }
        }

        assert!(register_hit(ally, &tuning, &mut events));
        assert_eq!(ally.hits, tuning.max_hits);
        assert!(!ally.alive);
        let removals = events
            .iter()
            .filter(|e| matches!(e, FrameEvent::Despawned { kind: EntityKind::Ally, .. }))
            .count();
        assert_eq!(removals, 1);
    }
}
