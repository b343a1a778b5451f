//! Scene configuration.

use glam::Vec2;

use crate::error::{PhysicsError, PhysicsResult};
use crate::integration::IntegrationMethod;

/// Parameters controlling how a [`Scene`](super::Scene) advances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Fixed simulation step in seconds.
    pub timestep: f32,
    /// Maximum solver passes per step.
    pub solver_iterations: u32,
    /// Acceleration applied to every active dynamic body each step.
    pub gravity: Vec2,
    pub integration: IntegrationMethod,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            timestep: 0.005,
            solver_iterations: 1,
            gravity: Vec2::new(0.0, -20.0),
            integration: IntegrationMethod::Verlet,
        }
    }
}

impl SceneConfig {
    /// Defaults with gravity disabled, for scenes driven purely by
    /// external forces.
    pub fn zero_gravity() -> Self {
        Self {
            gravity: Vec2::ZERO,
            ..Default::default()
        }
    }

    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_solver_iterations(mut self, iterations: u32) -> Self {
        self.solver_iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_integration(mut self, method: IntegrationMethod) -> Self {
        self.integration = method;
        self
    }

    /// Rejects a non-positive or non-finite timestep, zero solver iterations
    /// and non-finite gravity.
    pub fn validate(&self) -> PhysicsResult<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(PhysicsError::InvalidParameter {
                name: "timestep",
                value: self.timestep,
            });
        }
        if self.solver_iterations == 0 {
            return Err(PhysicsError::InvalidParameter {
                name: "solver_iterations",
                value: 0.0,
            });
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter {
                name: "gravity",
                value: self.gravity.length(),
            });
        }
        Ok(())
    }
}
