use glam::Vec2;
use tracing::trace;

use crate::error::{PhysicsError, PhysicsResult};
use crate::objects::RigidBody;

/// Raw contact geometry produced by a detection routine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactGeometry {
    /// Closest point on shape A.
    pub pos_a: Vec2,
    /// Closest point on shape B.
    pub pos_b: Vec2,
    /// Unit normal pointing from A towards B.
    pub normal: Vec2,
    /// Signed separation along the normal; negative when penetrating.
    pub distance: f32,
}

/// What a contact connects. Bodies and planes are referenced by their index
/// in the owning scene, never by pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactPair {
    Bodies { a: usize, b: usize },
    /// A plane always plays side A.
    Plane { plane: usize, body: usize },
}

/// A speculative contact between two bodies, or between a plane and a body.
///
/// Contacts are rebuilt every step and carry the impulse accumulated by the
/// solver during that step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pair: ContactPair,
    geometry: ContactGeometry,
    /// 1 / (sum of inverse masses).
    effective_mass: f32,
    restitution: f32,
    accumulated_impulse: f32,
    is_colliding: bool,
}

impl Contact {
    /// Builds a contact between bodies `a` and `b` of `bodies`.
    pub fn between_bodies(
        bodies: &[RigidBody],
        a: usize,
        b: usize,
        geometry: ContactGeometry,
    ) -> PhysicsResult<Self> {
        if a == b {
            return Err(PhysicsError::SelfContact { body: a });
        }
        let body_a = body_at(bodies, a)?;
        let body_b = body_at(bodies, b)?;
        let inv_mass_sum = body_a.inv_mass() + body_b.inv_mass();
        Self::build(
            ContactPair::Bodies { a, b },
            geometry,
            inv_mass_sum,
            0.5 * (body_a.elasticity + body_b.elasticity),
        )
    }

    /// Builds a contact between plane index `plane` and body `body`. Only the
    /// body's mass and elasticity are used.
    pub fn with_plane(
        plane: usize,
        bodies: &[RigidBody],
        body: usize,
        geometry: ContactGeometry,
    ) -> PhysicsResult<Self> {
        let b = body_at(bodies, body)?;
        Self::build(ContactPair::Plane { plane, body }, geometry, b.inv_mass(), b.elasticity)
    }

    fn build(
        pair: ContactPair,
        geometry: ContactGeometry,
        inv_mass_sum: f32,
        restitution: f32,
    ) -> PhysicsResult<Self> {
        // Static bodies contribute exactly zero, so any positive sum is movable.
        if !inv_mass_sum.is_finite() || inv_mass_sum <= 0.0 {
            return Err(PhysicsError::DegenerateMass { inv_mass_sum });
        }
        Ok(Self {
            pair,
            geometry,
            effective_mass: 1.0 / inv_mass_sum,
            restitution,
            accumulated_impulse: 0.0,
            is_colliding: false,
        })
    }

    pub fn pair(&self) -> ContactPair {
        self.pair
    }

    pub fn has_plane(&self) -> bool {
        matches!(self.pair, ContactPair::Plane { .. })
    }

    /// Index of body A, or `None` when side A is a plane.
    pub fn body_a(&self) -> Option<usize> {
        match self.pair {
            ContactPair::Bodies { a, .. } => Some(a),
            ContactPair::Plane { .. } => None,
        }
    }

    pub fn body_b(&self) -> usize {
        match self.pair {
            ContactPair::Bodies { b, .. } => b,
            ContactPair::Plane { body, .. } => body,
        }
    }

    pub fn plane(&self) -> Option<usize> {
        match self.pair {
            ContactPair::Plane { plane, .. } => Some(plane),
            ContactPair::Bodies { .. } => None,
        }
    }

    pub fn geometry(&self) -> &ContactGeometry {
        &self.geometry
    }

    pub fn pos_a(&self) -> Vec2 {
        self.geometry.pos_a
    }

    pub fn pos_b(&self) -> Vec2 {
        self.geometry.pos_b
    }

    pub fn normal(&self) -> Vec2 {
        self.geometry.normal
    }

    pub fn distance(&self) -> f32 {
        self.geometry.distance
    }

    pub fn effective_mass(&self) -> f32 {
        self.effective_mass
    }

    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Total impulse applied this step; never positive.
    pub fn accumulated_impulse(&self) -> f32 {
        self.accumulated_impulse
    }

    pub fn is_colliding(&self) -> bool {
        self.is_colliding
    }

    pub(crate) fn mark_colliding(&mut self) {
        self.is_colliding = true;
    }

    /// Whether every body index this contact refers to exists in `bodies`.
    pub fn fits(&self, bodies: &[RigidBody]) -> bool {
        let a_ok = match self.body_a() {
            Some(a) => a < bodies.len(),
            None => true,
        };
        a_ok && self.body_b() < bodies.len()
    }

    /// Velocity of B relative to A along the normal. A plane does not move.
    ///
    /// # Panics
    ///
    /// Panics unless [`Contact::fits`] holds for `bodies`.
    pub fn relative_velocity(&self, bodies: &[RigidBody]) -> f32 {
        let n = self.geometry.normal;
        match self.pair {
            ContactPair::Bodies { a, b } => n.dot(bodies[b].velocity) - n.dot(bodies[a].velocity),
            ContactPair::Plane { body, .. } => n.dot(bodies[body].velocity),
        }
    }

    /// Adds `magnitude` to the accumulated impulse, clamped so the total
    /// never becomes positive, and applies only the change to the bodies.
    ///
    /// A positive total would pull the bodies together.
    ///
    /// # Panics
    ///
    /// Panics unless [`Contact::fits`] holds for `bodies`.
    pub fn apply_impulse(&mut self, magnitude: f32, bodies: &mut [RigidBody]) {
        let clamped = (self.accumulated_impulse + magnitude).min(0.0);
        let delta = clamped - self.accumulated_impulse;
        self.accumulated_impulse = clamped;

        let impulse = delta * self.geometry.normal;
        trace!(pair = ?self.pair, delta, total = clamped, "impulse");

        if let ContactPair::Bodies { a, .. } = self.pair {
            let body_a = &mut bodies[a];
            body_a.velocity += impulse * body_a.inv_mass();
        }
        let body_b = &mut bodies[self.body_b()];
        body_b.velocity -= impulse * body_b.inv_mass();
    }
}

pub(crate) fn body_at(bodies: &[RigidBody], index: usize) -> PhysicsResult<&RigidBody> {
    bodies.get(index).ok_or(PhysicsError::IndexOutOfRange {
        what: "body",
        index,
        len: bodies.len(),
    })
}
