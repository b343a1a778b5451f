pub mod aabb;
pub mod contact;
pub mod detection;
pub mod queries;
pub mod solver;

// Re-export key types
pub use aabb::Aabb;
pub use contact::{Contact, ContactGeometry, ContactPair};
pub use detection::{body_contact, plane_contact};
pub use queries::{closest_point_on_triangle, contains_point, overlaps};
pub use solver::Solver;
