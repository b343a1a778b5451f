pub mod rigid_body;
pub mod plane;

pub use rigid_body::RigidBody;
pub use plane::Plane;
