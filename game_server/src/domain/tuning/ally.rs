use glam::Vec3;

/// Gameplay tuning for escort allies spawned by the power pellet.
#[derive(Debug, Clone, Copy)]
pub struct AllyTuning {
    pub count: usize,

    /// Follow distance of the first ally; later allies add `follow_stagger` each.
    pub follow_distance: f32,
    pub follow_stagger: f32,

    /// Distance covered per frame while catching up with the player.
    pub follow_speed: f32,

    /// Allies closer than this push each other apart.
    pub separation_radius: f32,
    pub separation_strength: f32,

    /// Enemy contacts an ally absorbs before it is removed.
    pub max_hits: u32,

    /// Frames an ally flashes (and ignores further contacts) after a hit.
    pub flash_frames: u32,

    pub height: f32,
    pub half_extents: Vec3,
}

impl Default for AllyTuning {
    fn default() -> Self {
        Self {
            count: 3,
            follow_distance: 1.5,
            follow_stagger: 0.8,
            follow_speed: 0.12,
            separation_radius: 1.0,
            separation_strength: 0.05,
            max_hits: 3,
            flash_frames: 10,
            height: 0.3,
            half_extents: Vec3::splat(0.3),
        }
    }
}
