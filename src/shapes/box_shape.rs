use glam::Vec2;

use crate::collision::Aabb;
use crate::error::{PhysicsError, PhysicsResult};

/// Axis-aligned box described by its half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub half_extent: Vec2,
}

impl BoxShape {
    pub fn new(half_extent: Vec2) -> PhysicsResult<Self> {
        if half_extent.x.is_nan() || half_extent.x < 0.0 {
            return Err(PhysicsError::InvalidParameter {
                name: "half_extent.x",
                value: half_extent.x,
            });
        }
        if half_extent.y.is_nan() || half_extent.y < 0.0 {
            return Err(PhysicsError::InvalidParameter {
                name: "half_extent.y",
                value: half_extent.y,
            });
        }
        Ok(Self { half_extent })
    }

    /// Creates a box from its full width and height.
    pub fn from_size(width: f32, height: f32) -> PhysicsResult<Self> {
        Self::new(Vec2::new(width, height) * 0.5)
    }

    pub fn width(&self) -> f32 {
        2.0 * self.half_extent.x
    }

    pub fn height(&self) -> f32 {
        2.0 * self.half_extent.y
    }

    /// World-space view of this box placed at `center`.
    pub fn aabb(&self, center: Vec2) -> Aabb {
        Aabb::new(center, self.half_extent)
    }
}
