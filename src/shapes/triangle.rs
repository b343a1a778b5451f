use glam::Vec2;

use crate::collision::Aabb;

/// Triangle with vertices stored relative to the owning collider's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// World-space vertices for a triangle placed at `center`.
    pub fn vertices(&self, center: Vec2) -> [Vec2; 3] {
        [self.a + center, self.b + center, self.c + center]
    }

    /// World-space bounding box.
    pub fn aabb(&self, center: Vec2) -> Aabb {
        let [a, b, c] = self.vertices(center);
        Aabb::from_min_max(a.min(b).min(c), a.max(b).max(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    fn right_triangle() -> Triangle {
        Triangle::new(Vec2::ZERO, Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0))
    }

    #[test]
    fn test_triangle_vertices() {
        let t = right_triangle();
        let [a, b, c] = t.vertices(Vec2::new(1.0, 1.0));
        assert_eq!(a, Vec2::new(1.0, 1.0));
        assert_eq!(b, Vec2::new(3.0, 1.0));
        assert_eq!(c, Vec2::new(1.0, 3.0));
    }

    #[test]
    fn test_triangle_aabb() {
        let aabb = right_triangle().aabb(Vec2::new(-1.0, 0.0));
        assert!((aabb.left() + 1.0).abs() < EPSILON);
        assert!((aabb.right() - 1.0).abs() < EPSILON);
        assert!(aabb.bottom().abs() < EPSILON);
        assert!((aabb.top() - 2.0).abs() < EPSILON);
    }
}
