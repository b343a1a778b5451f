//! Named shape parameters for binding-style creation calls.

use std::collections::BTreeMap;

use glam::Vec2;

use super::{BoxShape, Circle, Shape, ShapeKind, Triangle};
use crate::error::{PhysicsError, PhysicsResult};

/// Name -> value map describing a shape's payload.
///
/// Circles read `r`; boxes read the full size `w` and `h`; triangles read
/// vertex coordinates `ax`, `ay`, `bx`, `by`, `cx`, `cy` (relative to the
/// center). Unrecognized names are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeParams {
    values: BTreeMap<String, f32>,
}

impl ShapeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: f32) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f32) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    fn require(&self, kind: ShapeKind, name: &'static str) -> PhysicsResult<f32> {
        self.get(name)
            .ok_or(PhysicsError::MissingParameter { kind, name })
    }

    /// Builds the shape payload for `kind` from the stored parameters.
    pub fn build(&self, kind: ShapeKind) -> PhysicsResult<Shape> {
        match kind {
            ShapeKind::Circle => {
                let r = self.require(kind, "r")?;
                Ok(Shape::Circle(Circle::new(r)?))
            }
            ShapeKind::Box => {
                let w = self.require(kind, "w")?;
                let h = self.require(kind, "h")?;
                Ok(Shape::Box(BoxShape::from_size(w, h)?))
            }
            ShapeKind::Triangle => {
                let a = Vec2::new(self.require(kind, "ax")?, self.require(kind, "ay")?);
                let b = Vec2::new(self.require(kind, "bx")?, self.require(kind, "by")?);
                let c = Vec2::new(self.require(kind, "cx")?, self.require(kind, "cy")?);
                Ok(Shape::Triangle(Triangle::new(a, b, c)))
            }
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for ShapeParams {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        let mut params = ShapeParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
