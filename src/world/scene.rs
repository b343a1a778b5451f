use glam::Vec2;
use tracing::{debug, error, warn};

use super::collision_table::{CollisionTable, ShapeId};
use super::config::SceneConfig;
use crate::collision::{self, Contact, ContactPair, Solver};
use crate::error::{PhysicsError, PhysicsResult};
use crate::integration::integrate;
use crate::objects::{Plane, RigidBody};
use crate::shapes::{Collider, ShapeKind, ShapeParams, SoftBody};

/// Summary of one committed step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepStats {
    /// Contacts generated this step.
    pub contacts: usize,
    /// Impulse applications performed by the solver.
    pub resolved: u32,
    /// Total kinetic energy after the step.
    pub kinetic_energy: f32,
}

/// State produced by a step before it is committed.
struct Frame {
    bodies: Vec<RigidBody>,
    contacts: Vec<Contact>,
    collisions: CollisionTable,
    resolved: u32,
}

/// Owns every body, soft body and plane, and advances them one fixed step
/// at a time.
pub struct Scene {
    config: SceneConfig,
    solver: Solver,
    bodies: Vec<RigidBody>,
    soft_bodies: Vec<SoftBody>,
    planes: Vec<Plane>,
    // Published by the last committed step
    contacts: Vec<Contact>,
    collisions: CollisionTable,
    paused: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene with the default configuration.
    pub fn new() -> Self {
        Self::build(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> PhysicsResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SceneConfig) -> Self {
        Self {
            config,
            solver: Solver::new(config.solver_iterations),
            bodies: Vec::new(),
            soft_bodies: Vec::new(),
            planes: Vec::new(),
            contacts: Vec::new(),
            collisions: CollisionTable::new(),
            paused: false,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SceneConfig) -> PhysicsResult<()> {
        config.validate()?;
        self.config = config;
        self.solver = Solver::new(config.solver_iterations);
        Ok(())
    }

    /// Adds a fully built rigid body and returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// Creates a dynamic rigid body from named shape parameters.
    pub fn add_rigid_body(
        &mut self,
        kind: ShapeKind,
        velocity: Vec2,
        position: Vec2,
        mass: f32,
        elasticity: f32,
        params: &ShapeParams,
    ) -> PhysicsResult<usize> {
        let body = params
            .build(kind)
            .and_then(|shape| RigidBody::new(Collider::new(position, shape), velocity, mass, elasticity))
            .inspect_err(|err| warn!(%kind, error = %err, "rejected rigid body"))?;
        Ok(self.add_body(body))
    }

    /// Creates an immovable rigid body from named shape parameters.
    pub fn add_static_body(
        &mut self,
        kind: ShapeKind,
        position: Vec2,
        elasticity: f32,
        params: &ShapeParams,
    ) -> PhysicsResult<usize> {
        let body = params
            .build(kind)
            .and_then(|shape| RigidBody::new_static(Collider::new(position, shape), elasticity))
            .inspect_err(|err| warn!(%kind, error = %err, "rejected static body"))?;
        Ok(self.add_body(body))
    }

    /// Adds an overlap-only shape and returns its index.
    pub fn add_collider(&mut self, collider: SoftBody) -> usize {
        let index = self.soft_bodies.len();
        self.soft_bodies.push(collider);
        index
    }

    /// Creates a soft (overlap-only) body from named shape parameters.
    pub fn add_soft_body(&mut self, kind: ShapeKind, position: Vec2, params: &ShapeParams) -> PhysicsResult<usize> {
        let shape = params
            .build(kind)
            .inspect_err(|err| warn!(%kind, error = %err, "rejected soft body"))?;
        Ok(self.add_collider(Collider::new(position, shape)))
    }

    /// Adds a plane, normalizing `normal`.
    pub fn add_plane(&mut self, normal: Vec2, distance: f32) -> PhysicsResult<usize> {
        let plane = Plane::new(normal, distance).inspect_err(|err| warn!(error = %err, "rejected plane"))?;
        let index = self.planes.len();
        self.planes.push(plane);
        Ok(index)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn soft_bodies(&self) -> &[SoftBody] {
        &self.soft_bodies
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn rigid_body(&self, index: usize) -> PhysicsResult<&RigidBody> {
        let len = self.bodies.len();
        self.bodies.get(index).ok_or(out_of_range("body", index, len))
    }

    pub fn rigid_body_mut(&mut self, index: usize) -> PhysicsResult<&mut RigidBody> {
        let len = self.bodies.len();
        self.bodies.get_mut(index).ok_or(out_of_range("body", index, len))
    }

    pub fn soft_body(&self, index: usize) -> PhysicsResult<&SoftBody> {
        let len = self.soft_bodies.len();
        self.soft_bodies.get(index).ok_or(out_of_range("soft body", index, len))
    }

    pub fn soft_body_mut(&mut self, index: usize) -> PhysicsResult<&mut SoftBody> {
        let len = self.soft_bodies.len();
        self.soft_bodies.get_mut(index).ok_or(out_of_range("soft body", index, len))
    }

    pub fn plane(&self, index: usize) -> PhysicsResult<&Plane> {
        let len = self.planes.len();
        self.planes.get(index).ok_or(out_of_range("plane", index, len))
    }

    pub fn plane_mut(&mut self, index: usize) -> PhysicsResult<&mut Plane> {
        let len = self.planes.len();
        self.planes.get_mut(index).ok_or(out_of_range("plane", index, len))
    }

    /// Activates or deactivates a rigid or soft body. Inactive shapes are
    /// skipped by integration and detection.
    pub fn set_active(&mut self, id: ShapeId, active: bool) -> PhysicsResult<()> {
        match id {
            ShapeId::Rigid(i) => self.rigid_body_mut(i)?.collider.active = active,
            ShapeId::Soft(i) => self.soft_body_mut(i)?.active = active,
        }
        Ok(())
    }

    /// Accumulates an external force on a rigid body for the next step.
    pub fn apply_force(&mut self, index: usize, force: Vec2) -> PhysicsResult<()> {
        self.rigid_body_mut(index)?.apply_force(force);
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Contacts solved by the last committed step.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn collisions(&self) -> &CollisionTable {
        &self.collisions
    }

    /// Collision state of a pair as of the last committed step.
    pub fn is_colliding(&self, a: ShapeId, b: ShapeId) -> bool {
        self.collisions.is_colliding(a, b)
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(RigidBody::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(RigidBody::momentum).sum()
    }

    /// Advances the scene by one timestep.
    ///
    /// The step either commits completely or not at all: if contact
    /// generation fails, the error is returned and bodies, contacts and the
    /// collision table keep the state of the previous step.
    pub fn step(&mut self) -> PhysicsResult<StepStats> {
        if self.paused {
            return Ok(StepStats {
                kinetic_energy: self.total_kinetic_energy(),
                ..StepStats::default()
            });
        }

        let frame = self
            .simulate()
            .inspect_err(|err| error!(error = %err, fatal = err.is_fatal(), "step aborted"))?;

        self.bodies = frame.bodies;
        self.contacts = frame.contacts;
        self.collisions = frame.collisions;

        let stats = StepStats {
            contacts: self.contacts.len(),
            resolved: frame.resolved,
            kinetic_energy: self.total_kinetic_energy(),
        };
        debug!(
            contacts = stats.contacts,
            resolved = stats.resolved,
            kinetic_energy = stats.kinetic_energy,
            "step"
        );
        Ok(stats)
    }

    fn simulate(&self) -> PhysicsResult<Frame> {
        let dt = self.config.timestep;
        let mut bodies = self.bodies.clone();

        for body in bodies.iter_mut().filter(|b| b.is_active()) {
            if !body.is_static {
                body.apply_force(self.config.gravity * body.mass);
            }
            integrate(body, dt, self.config.integration);
        }

        let mut contacts = self.generate_contacts(&bodies)?;
        let resolved = self.solver.solve(&mut contacts, &mut bodies, dt);

        let mut collisions = CollisionTable::new();
        for contact in &contacts {
            if let ContactPair::Bodies { a, b } = contact.pair() {
                collisions.record(ShapeId::Rigid(a), ShapeId::Rigid(b), contact.is_colliding());
            }
        }
        for (si, soft) in self.soft_bodies.iter().enumerate().filter(|(_, s)| s.active) {
            for (bi, body) in bodies.iter().enumerate().filter(|(_, b)| b.is_active()) {
                let overlap = collision::overlaps(soft, &body.collider)?;
                collisions.record(ShapeId::Soft(si), ShapeId::Rigid(bi), overlap);
            }
        }

        Ok(Frame {
            bodies,
            contacts,
            collisions,
            resolved,
        })
    }

    /// Plane contacts for every active plane and dynamic body, then body
    /// contacts for every active pair that is not entirely static.
    fn generate_contacts(&self, bodies: &[RigidBody]) -> PhysicsResult<Vec<Contact>> {
        let mut contacts = Vec::new();

        for (pi, _) in self.planes.iter().enumerate().filter(|(_, p)| p.active) {
            for (bi, _) in bodies.iter().enumerate().filter(|(_, b)| b.is_active() && !b.is_static) {
                contacts.push(collision::plane_contact(&self.planes, pi, bodies, bi)?);
            }
        }

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = (&bodies[i], &bodies[j]);
                if !a.is_active() || !b.is_active() || (a.is_static && b.is_static) {
                    continue;
                }
                contacts.push(collision::body_contact(bodies, i, j)?);
            }
        }

        Ok(contacts)
    }
}

fn out_of_range(what: &'static str, index: usize, len: usize) -> PhysicsError {
    PhysicsError::IndexOutOfRange { what, index, len }
}
