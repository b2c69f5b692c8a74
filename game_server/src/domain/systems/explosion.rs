use crate::domain::state::Particle;
use crate::domain::tuning::ExplosionTuning;
use glam::Vec3;
use rand::Rng;

pub fn spawn_particles<R: Rng>(
    particles: &mut Vec<Particle>,
    origin: Vec3,
    tuning: &ExplosionTuning,
    rng: &mut R,
) {
    particles.extend((0..tuning.particles).map(|_| Particle {
        position: origin,
        velocity: Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.0..2.0),
            rng.gen_range(-1.0..1.0),
        ),
        opacity: 1.0,
    }));
}

/// Advances particles one frame, fading them by time since the explosion began.
///
/// Returns true while the explosion is still running.
pub fn advance(particles: &mut Vec<Particle>, since_start: f32, tuning: &ExplosionTuning) -> bool {
    let opacity = 1.0 - since_start / tuning.duration;
    for p in particles.iter_mut() {
        p.position += p.velocity * tuning.velocity_step;
        p.velocity *= tuning.damping;
        p.opacity = opacity;
    }
    particles.retain(|p| p.opacity > 0.0);

    since_start < tuning.duration
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn particles_spread_and_fade_out() {
        let tuning = ExplosionTuning::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut particles = Vec::new();
        spawn_particles(&mut particles, Vec3::ZERO, &tuning, &mut rng);
        assert_eq!(particles.len(), tuning.particles);

        assert!(advance(&mut particles, 0.5, &tuning));
        assert!(particles.iter().all(|p| (p.opacity - 0.5).abs() < 1e-6));
        assert!(particles.iter().any(|p| p.position != Vec3::ZERO));

        assert!(!advance(&mut particles, 1.0, &tuning));
        assert!(particles.is_empty());
    }
}
