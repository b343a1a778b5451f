use glam::Vec2;

use crate::error::{PhysicsError, PhysicsResult};

/// Static half-space boundary: points with `dot(p, normal) - distance >= 0`
/// are on the free side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub active: bool,
    /// Unit normal, pointing out of the solid side.
    pub normal: Vec2,
    pub distance: f32,
}

impl Plane {
    /// Creates a plane, normalizing `normal`. A zero normal is rejected.
    pub fn new(normal: Vec2, distance: f32) -> PhysicsResult<Self> {
        let normal = normal.try_normalize().ok_or(PhysicsError::InvalidParameter {
            name: "normal",
            value: normal.length(),
        })?;
        Ok(Self {
            active: true,
            normal,
            distance,
        })
    }

    /// Signed distance from `p` to the plane, positive on the free side.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        p.dot(self.normal) - self.distance
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project(&self, p: Vec2) -> Vec2 {
        p - self.signed_distance(p) * self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_plane_normalizes() {
        let plane = Plane::new(Vec2::new(0.0, 5.0), 1.0).unwrap();
        assert!((plane.normal - Vec2::Y).length() < EPSILON);
        assert!(plane.active);

        let diag = Plane::new(Vec2::new(1.0, 1.0), 0.0).unwrap();
        assert!((diag.normal.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_plane_zero_normal() {
        assert!(Plane::new(Vec2::ZERO, 0.0).is_err());
    }

    #[test]
    fn test_signed_distance_and_projection() {
        let plane = Plane::new(Vec2::Y, -2.0).unwrap();
        assert!((plane.signed_distance(Vec2::new(3.0, 1.0)) - 3.0).abs() < EPSILON);
        assert!((plane.signed_distance(Vec2::new(0.0, -3.0)) + 1.0).abs() < EPSILON);
        let p = plane.project(Vec2::new(3.0, 1.0));
        assert!((p - Vec2::new(3.0, -2.0)).length() < EPSILON);
    }
}
