use glam::Vec2;

use super::{BoxShape, Circle, Shape, ShapeKind, Triangle};
use crate::collision::Aabb;
use crate::error::PhysicsResult;

/// A placed shape: the base entity shared by soft and rigid bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Inactive colliders are skipped by detection and integration.
    pub active: bool,
    /// World-space reference point; origin of the shape's local geometry.
    pub center: Vec2,
    pub shape: Shape,
}

/// A collider with no dynamics; only takes part in overlap queries.
pub type SoftBody = Collider;

impl Collider {
    pub fn new(center: Vec2, shape: Shape) -> Self {
        Self {
            active: true,
            center,
            shape,
        }
    }

    pub fn circle(center: Vec2, radius: f32) -> PhysicsResult<Self> {
        Ok(Self::new(center, Shape::Circle(Circle::new(radius)?)))
    }

    pub fn aabb(center: Vec2, half_extent: Vec2) -> PhysicsResult<Self> {
        Ok(Self::new(center, Shape::Box(BoxShape::new(half_extent)?)))
    }

    /// Triangle with vertices `a`, `b`, `c` given relative to `center`.
    pub fn triangle(center: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self::new(center, Shape::Triangle(Triangle::new(a, b, c)))
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// World-space bounding box of the collider.
    pub fn bounds(&self) -> Aabb {
        match &self.shape {
            Shape::Circle(circle) => Aabb::new(self.center, Vec2::splat(circle.radius)),
            Shape::Box(b) => b.aabb(self.center),
            Shape::Triangle(t) => t.aabb(self.center),
        }
    }
}
