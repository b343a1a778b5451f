//! 2D rigid-body collision detection and response with speculative
//! contacts.
//!
//! Bodies are non-rotating circles and axis-aligned boxes. Each
//! [`Scene::step`] integrates every active body, generates a contact for
//! every plane/body and body/body pair (touching or not), and resolves them
//! with a sequential impulse solver that removes only the velocity that
//! would close a gap within the next step.

pub mod collision;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{Aabb, Contact, ContactPair, Solver};
pub use error::{PhysicsError, PhysicsResult};
pub use glam::Vec2;
pub use integration::IntegrationMethod;
pub use objects::{Plane, RigidBody};
pub use shapes::{Collider, Shape, ShapeKind, ShapeParams, SoftBody};
pub use world::{CollisionTable, Scene, SceneConfig, ShapeId, StepStats};
