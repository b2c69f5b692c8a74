use glam::Vec3;

/// Gameplay tuning for the power pellet.
#[derive(Debug, Clone, Copy)]
pub struct PickupTuning {
    /// Seconds between spawn attempts; the first attempt happens after one interval.
    pub interval: f32,

    /// Seconds the protection lasts once collected.
    pub protection_duration: f32,

    pub height: f32,
    pub bounce_amplitude: f32,

    /// Phase advance per frame, in radians.
    pub bounce_speed: f32,

    pub half_extents: Vec3,
}

impl Default for PickupTuning {
    fn default() -> Self {
        Self {
            interval: 12.0,
            protection_duration: 15.0,
            height: 0.6,
            bounce_amplitude: 0.25,
            bounce_speed: 0.1,
            half_extents: Vec3::splat(0.3),
        }
    }
}
