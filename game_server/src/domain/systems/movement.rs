use crate::domain::state::{CameraSnapshot, Player};
use crate::domain::tuning::PlayerTuning;
use glam::{Quat, Vec2, Vec3};

/// Follow camera with free-look yaw/pitch on top of the fixed offset.
#[derive(Debug, Default, Clone, Copy)]
pub struct CameraRig {
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraRig {
    pub fn apply_pan(&mut self, pan: Vec2, tuning: &PlayerTuning) {
        self.yaw -= pan.x * tuning.pan_sensitivity;
        self.pitch =
            (self.pitch + pan.y * tuning.pan_sensitivity).clamp(tuning.min_pitch, tuning.max_pitch);
    }

    pub fn view(&self, target: Vec3, tuning: &PlayerTuning) -> CameraSnapshot {
        let rotation = Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch);
        CameraSnapshot {
            position: target + rotation * tuning.camera_offset,
            target,
        }
    }
}

/// Moves the player along `movement` (x, z) and turns it to face that way.
pub fn move_player(player: &mut Player, movement: Vec2, tuning: &PlayerTuning) {
    if !player.alive || movement == Vec2::ZERO {
        return;
    }

    let dir = Vec3::new(movement.x, 0.0, movement.y);
    player.position += dir * tuning.speed;
    player.heading = dir.x.atan2(dir.z);
}
