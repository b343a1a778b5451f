use crate::error::{PhysicsError, PhysicsResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f32,
}

impl Circle {
    pub fn new(radius: f32) -> PhysicsResult<Self> {
        if radius.is_nan() || radius < 0.0 {
            return Err(PhysicsError::InvalidParameter {
                name: "radius",
                value: radius,
            });
        }
        Ok(Self { radius })
    }
}
