pub mod circle;
pub mod box_shape;
pub mod triangle;
pub mod collider;
pub mod params;

pub use circle::Circle;
pub use box_shape::BoxShape;
pub use triangle::Triangle;
pub use collider::{Collider, SoftBody};
pub use params::ShapeParams;

use std::fmt;

/// Geometry of a collider, relative to its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Box(BoxShape),
    Triangle(Triangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Box(_) => ShapeKind::Box,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

/// Discriminant of [`Shape`], used for creation requests and error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Box,
    Triangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Box => "box",
            ShapeKind::Triangle => "triangle",
        };
        f.write_str(name)
    }
}
