/// Play field bounds and wave sizing.
#[derive(Debug, Clone, Copy)]
pub struct FieldTuning {
    /// Spawn positions fall in `[-half_size, half_size]` on x and z.
    pub half_size: f32,

    /// Collectibles per wave number.
    pub collectibles_per_wave: u32,

    /// Resting height of a collectible's center.
    pub collectible_height: f32,

    pub collectible_half_extents: glam::Vec3,

    /// Seconds after start before the first wave appears.
    pub first_wave_delay: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            half_size: 9.0,
            collectibles_per_wave: 5,
            collectible_height: 0.25,
            collectible_half_extents: glam::Vec3::new(1.0, 0.25, 0.5),
            first_wave_delay: 3.0,
        }
    }
}
