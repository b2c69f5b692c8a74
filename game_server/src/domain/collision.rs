// Axis-aligned bounding box checks between live entities.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Touching faces count as an intersection.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Anything that can take part in a collision test.
pub trait Collider {
    fn aabb(&self) -> Aabb;
    fn is_alive(&self) -> bool;
}

/// Entities that were removed (or never spawned) never collide.
/// Boxes are rebuilt on every call; entity counts stay in the tens.
pub fn collides(a: &impl Collider, b: &impl Collider) -> bool {
    if !a.is_alive() || !b.is_alive() {
        return false;
    }
    a.aabb().intersects(&b.aabb())
}
