use glam::Vec2;

use crate::error::{PhysicsError, PhysicsResult};
use crate::shapes::{Collider, Shape, ShapeKind};

/// A non-rotating point-mass body: a collider plus linear dynamics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    // Geometry
    pub collider: Collider,

    // Physical properties
    pub mass: f32,
    /// Coefficient of restitution in [0, 1].
    pub elasticity: f32,
    /// Immovable: never integrated and never pushed by contacts.
    pub is_static: bool,

    // State
    pub velocity: Vec2,
    /// Force accumulated for the current step, cleared by integration.
    pub force: Vec2,
}

impl RigidBody {
    /// Creates a dynamic body. Only circles and boxes can be rigid; mass must
    /// be positive and elasticity within [0, 1].
    pub fn new(collider: Collider, velocity: Vec2, mass: f32, elasticity: f32) -> PhysicsResult<Self> {
        Self::check_kind(&collider)?;
        if mass.is_nan() || mass <= 0.0 {
            return Err(PhysicsError::InvalidParameter { name: "mass", value: mass });
        }
        Self::check_elasticity(elasticity)?;
        Ok(Self {
            collider,
            mass,
            elasticity,
            is_static: false,
            velocity,
            force: Vec2::ZERO,
        })
    }

    /// Creates an immovable body (infinite mass).
    pub fn new_static(collider: Collider, elasticity: f32) -> PhysicsResult<Self> {
        Self::check_kind(&collider)?;
        Self::check_elasticity(elasticity)?;
        Ok(Self {
            collider,
            mass: 0.0,
            elasticity,
            is_static: true,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
        })
    }

    /// Dynamic circle centered at `center`.
    pub fn circle(velocity: Vec2, center: Vec2, mass: f32, elasticity: f32, radius: f32) -> PhysicsResult<Self> {
        Self::new(Collider::circle(center, radius)?, velocity, mass, elasticity)
    }

    /// Dynamic box centered at `center` with the given half extents.
    pub fn aabb(velocity: Vec2, center: Vec2, mass: f32, elasticity: f32, half_extent: Vec2) -> PhysicsResult<Self> {
        Self::new(Collider::aabb(center, half_extent)?, velocity, mass, elasticity)
    }

    /// Dynamic box centered at `(x, y)` with full width `w` and height `h`.
    pub fn aabb_from_rect(
        velocity: Vec2,
        mass: f32,
        elasticity: f32,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> PhysicsResult<Self> {
        Self::aabb(velocity, Vec2::new(x, y), mass, elasticity, Vec2::new(w, h) * 0.5)
    }

    fn check_kind(collider: &Collider) -> PhysicsResult<()> {
        match collider.shape {
            Shape::Circle(_) | Shape::Box(_) => Ok(()),
            Shape::Triangle(_) => Err(PhysicsError::UnsupportedBodyKind(ShapeKind::Triangle)),
        }
    }

    fn check_elasticity(elasticity: f32) -> PhysicsResult<()> {
        if (0.0..=1.0).contains(&elasticity) {
            Ok(())
        } else {
            Err(PhysicsError::InvalidParameter {
                name: "elasticity",
                value: elasticity,
            })
        }
    }

    pub fn center(&self) -> Vec2 {
        self.collider.center
    }

    pub fn kind(&self) -> ShapeKind {
        self.collider.kind()
    }

    pub fn is_active(&self) -> bool {
        self.collider.active
    }

    /// 1 / mass, or 0 for static bodies.
    pub fn inv_mass(&self) -> f32 {
        if self.is_static {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    pub fn momentum(&self) -> Vec2 {
        self.mass * self.velocity
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Applies a force at the center of mass.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }
}
