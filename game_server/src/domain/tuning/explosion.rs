/// Gameplay tuning for the player's death explosion.
#[derive(Debug, Clone, Copy)]
pub struct ExplosionTuning {
    pub particles: usize,

    /// Seconds until particles fade out and the game is over.
    pub duration: f32,

    /// Fraction of velocity applied to position each frame.
    pub velocity_step: f32,

    /// Velocity multiplier per frame.
    pub damping: f32,
}

impl Default for ExplosionTuning {
    fn default() -> Self {
        Self {
            particles: 30,
            duration: 1.0,
            velocity_step: 0.1,
            damping: 0.9,
        }
    }
}
