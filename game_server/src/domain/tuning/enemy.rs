use glam::Vec3;

/// Gameplay tuning for the chasing ghost.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    /// Seconds after start before the ghost appears.
    pub spawn_delay: f32,

    /// Distance covered per frame while pursuing.
    pub speed: f32,

    /// The ghost never sinks below this height.
    pub min_height: f32,

    /// Distance the ghost is knocked back after touching an ally.
    pub push_distance: f32,

    pub half_extents: Vec3,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            spawn_delay: 10.0,
            speed: 0.06,
            min_height: 0.5,
            push_distance: 1.5,
            half_extents: Vec3::splat(0.5),
        }
    }
}
