use glam::Vec3;

/// Gameplay tuning for the player vehicle and the camera following it.
///
/// Distances are world units; speeds are per rendered frame. The player rests
/// with its box bottom on the ground, so its center height is its half height.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Distance covered per frame at full input.
    pub speed: f32,

    /// Half extents of the placeholder cube used until the car model loads.
    pub placeholder_half_extents: Vec3,

    /// Half extents of the loaded car model.
    pub model_half_extents: Vec3,

    /// Camera offset from the player before any free-look panning.
    pub camera_offset: Vec3,

    /// Radians of yaw/pitch per pixel of pan drag.
    pub pan_sensitivity: f32,

    /// Pitch limits in radians for free-look.
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 0.25,
            placeholder_half_extents: Vec3::splat(0.5),
            model_half_extents: Vec3::new(0.6, 0.4, 1.2),
            camera_offset: Vec3::new(5.0, 10.0, 8.0),
            pan_sensitivity: 0.005,
            min_pitch: -0.6,
            max_pitch: 0.5,
        }
    }
}
