// Input adapter: folds raw keyboard/touch/mouse events into a small record
// the frame loop reads once per tick.

use glam::Vec2;

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Interact,
    Restart,
}

impl Key {
    /// Maps a browser `KeyboardEvent.key` value. Arrow keys and WASD both move.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " | "Space" | "Spacebar" => Some(Key::Interact),
            "r" | "R" => Some(Key::Restart),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Drag offset of the virtual joystick knob from its center, in pixels.
    Joystick { dx: f32, dy: f32, radius: f32 },
    JoystickReleased,
    /// On-screen button standing in for the interact key.
    InteractButton,
    /// Mouse/touch drag used for free-look camera panning, in pixels.
    Pan { dx: f32, dy: f32 },
}

pub const JOYSTICK_DEADZONE: f32 = 0.15;

/// Converts a joystick drag offset into an analog vector of length <= 1.
///
/// Offsets inside the deadzone map to zero; outside it the magnitude is
/// rescaled so output ramps from 0 at the deadzone edge to 1 at the rim.
pub fn joystick_vector(dx: f32, dy: f32, radius: f32, deadzone: f32) -> Vec2 {
    if !(radius.is_finite() && radius > 0.0) || !dx.is_finite() || !dy.is_finite() {
        return Vec2::ZERO;
    }

    let raw = Vec2::new(dx, dy) / radius;
    let len = raw.length().min(1.0);
    if len <= deadzone {
        return Vec2::ZERO;
    }

    let scaled = (len - deadzone) / (1.0 - deadzone);
    raw.normalize() * scaled
}

#[derive(Debug, Default, Clone)]
pub struct InputAdapter {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    analog: Vec2,
    interact: bool,
    restart: bool,
    pan: Vec2,
}

impl InputAdapter {
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.set_key(key, true),
            InputEvent::KeyUp(key) => self.set_key(key, false),
            InputEvent::Joystick { dx, dy, radius } => {
                self.analog = joystick_vector(dx, dy, radius, JOYSTICK_DEADZONE);
            }
            InputEvent::JoystickReleased => self.analog = Vec2::ZERO,
            InputEvent::InteractButton => self.interact = true,
            InputEvent::Pan { dx, dy } => {
                if dx.is_finite() && dy.is_finite() {
                    self.pan += Vec2::new(dx, dy);
                }
            }
        }
    }

    fn set_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            // Edge-triggered: only the press matters.
            Key::Interact => self.interact |= pressed,
            Key::Restart => self.restart |= pressed,
        }
    }

    /// Movement on the ground plane as (x, z); never longer than 1.
    pub fn movement(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v += self.analog;

        if v.length_squared() > 1.0 { v.normalize() } else { v }
    }

    pub fn take_interact(&mut self) -> bool {
        std::mem::take(&mut self.interact)
    }

    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    pub fn take_pan(&mut self) -> Vec2 {
        std::mem::take(&mut self.pan)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_and_wasd_map_to_the_same_directions() {
        assert_eq!(Key::from_code("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_code("w"), Some(Key::Up));
        assert_eq!(Key::from_code("D"), Some(Key::Right));
        assert_eq!(Key::from_code(" "), Some(Key::Interact));
        assert_eq!(Key::from_code("R"), Some(Key::Restart));
        assert_eq!(Key::from_code("Shift"), None);
    }

    #[test]
    fn diagonal_keys_are_normalized() {
        let mut input = InputAdapter::default();
        input.apply(InputEvent::KeyDown(Key::Up));
        input.apply(InputEvent::KeyDown(Key::Right));

        let v = input.movement();
        assert!((v.length() - 1.0).abs() < 1e-5);
        assert!(v.x > 0.0 && v.y < 0.0);
    }

    #[test]
    fn key_up_stops_movement() {
        let mut input = InputAdapter::default();
        input.apply(InputEvent::KeyDown(Key::Left));
        input.apply(InputEvent::KeyUp(Key::Left));
        assert_eq!(input.movement(), Vec2::ZERO);
    }

    #[test]
    fn joystick_inside_deadzone_is_zero() {
        assert_eq!(joystick_vector(5.0, 0.0, 50.0, 0.15), Vec2::ZERO);
    }

    #[test]
    fn joystick_is_clamped_to_unit_length() {
        let v = joystick_vector(200.0, 0.0, 50.0, 0.15);
        assert!((v.x - 1.0).abs() < 1e-5);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn joystick_ramps_from_deadzone_edge() {
        let v = joystick_vector(0.0, 25.0, 50.0, 0.0);
        assert!((v.y - 0.5).abs() < 1e-5);

        let v = joystick_vector(0.0, 25.0, 50.0, 0.15);
        assert!(v.y > 0.0 && v.y < 0.5);
    }

    #[test]
    fn joystick_with_bad_radius_is_zero() {
        assert_eq!(joystick_vector(10.0, 10.0, 0.0, 0.15), Vec2::ZERO);
        assert_eq!(joystick_vector(f32::NAN, 10.0, 50.0, 0.15), Vec2::ZERO);
    }

    #[test]
    fn interact_and_restart_are_consumed_once() {
        let mut input = InputAdapter::default();
        input.apply(InputEvent::KeyDown(Key::Interact));
        input.apply(InputEvent::KeyDown(Key::Restart));

        assert!(input.take_interact());
        assert!(!input.take_interact());
        assert!(input.take_restart());
        assert!(!input.take_restart());
    }

    #[test]
    fn pan_accumulates_until_taken() {
        let mut input = InputAdapter::default();
        input.apply(InputEvent::Pan { dx: 3.0, dy: 1.0 });
        input.apply(InputEvent::Pan { dx: 2.0, dy: -4.0 });

        assert_eq!(input.take_pan(), Vec2::new(5.0, -3.0));
        assert_eq!(input.take_pan(), Vec2::ZERO);
    }
}
