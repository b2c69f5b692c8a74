use crate::domain::state::{Enemy, IdAllocator};
use crate::domain::tuning::EnemyTuning;
use glam::Vec3;

/// Places the ghost in the field corner farthest from the player.
pub fn spawn_enemy(
    ids: &mut IdAllocator,
    tuning: &EnemyTuning,
    half_size: f32,
    player_position: Vec3,
) -> Enemy {
    let x = if player_position.x > 0.0 { -half_size } else { half_size };
    let z = if player_position.z > 0.0 { -half_size } else { half_size };
    Enemy {
        id: ids.next_id(),
        position: Vec3::new(x, tuning.min_height, z),
        half_extents: tuning.half_extents,
        alive: true,
    }
}

/// Pure pursuit: step straight at the target's current position.
pub fn pursue(enemy: &mut Enemy, target: Vec3, tuning: &EnemyTuning) {
    if !enemy.alive {
        return;
    }

    let to_target = target - enemy.position;
    let distance = to_target.length();
    if distance <= tuning.speed {
        enemy.position = target;
    } else {
        enemy.position += to_target / distance * tuning.speed;
    }
    enemy.position.y = enemy.position.y.max(tuning.min_height);
}

/// Knocks the ghost away from `from` along the ground.
pub fn push_away(enemy: &mut Enemy, from: Vec3, tuning: &EnemyTuning) {
    let away = Vec3::new(enemy.position.x - from.x, 0.0, enemy.position.z - from.z);
    let dir = away.try_normalize().unwrap_or(Vec3::X);
    enemy.position += dir * tuning.push_distance;
    enemy.position.y = enemy.position.y.max(tuning.min_height);
}
