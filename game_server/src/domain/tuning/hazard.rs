use glam::Vec3;

/// Gameplay tuning for falling cones and bombs.
#[derive(Debug, Clone, Copy)]
pub struct HazardTuning {
    /// Seconds before the first hazard drops.
    pub warmup: f32,

    /// Seconds between hazard ticks (one cone and one bomb per tick).
    pub interval: f32,

    /// Height hazards are dropped from.
    pub drop_height: f32,

    /// Height lost per frame.
    pub fall_per_frame: f32,

    /// Bombs try to land at least this far from the player.
    pub bomb_min_distance: f32,

    /// Attempts at finding a far enough bomb position before giving up.
    pub bomb_placement_attempts: u32,

    pub cone_half_extents: Vec3,
    pub bomb_half_extents: Vec3,

    /// Landing indicator scale when the hazard is at drop height.
    pub indicator_min_scale: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            warmup: 3.0,
            interval: 0.2,
            drop_height: 8.0,
            fall_per_frame: 0.25,
            bomb_min_distance: 6.0,
            bomb_placement_attempts: 10,
            cone_half_extents: Vec3::new(0.3, 0.5, 0.3),
            bomb_half_extents: Vec3::splat(0.4),
            indicator_min_scale: 0.3,
        }
    }
}
