//! Small vector and scalar helpers used by the shape queries and contact
//! generation. Vectors are `glam::Vec2`.

use glam::Vec2;

/// Velocity tolerance below which the solver treats a contact as violated.
pub const EPSILON: f32 = 0.001;

/// Returns `v` rotated 90 degrees counter-clockwise, `(-y, x)`.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// 2D cross product (z component of the 3D cross product).
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Projects `p` onto the segment `e0`-`e1`, clamped to the segment.
/// A zero-length edge projects everything onto `e0`.
pub fn project_on_edge(p: Vec2, e0: Vec2, e1: Vec2) -> Vec2 {
    let u = p - e0;
    let v = e1 - e0;
    let len_sq = v.dot(v);
    if len_sq < f32::EPSILON {
        return e0;
    }
    let t = u.dot(v) / len_sq;
    e0 + v * t.clamp(0.0, 1.0)
}

/// Normalizes `v`, or returns `fallback` when `v` has no usable direction.
#[inline]
pub fn unit_or(v: Vec2, fallback: Vec2) -> Vec2 {
    v.try_normalize().unwrap_or(fallback)
}

#[inline]
pub fn min3(a: f32, b: f32, c: f32) -> f32 {
    a.min(b).min(c)
}

#[inline]
pub fn max3(a: f32, b: f32, c: f32) -> f32 {
    a.max(b).max(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    const TOL: f32 = 1e-6;

    #[test]
    fn test_perp() {
        let v = Vec2::new(3.0, 4.0);
        let p = perp(v);
        assert_eq!(p, Vec2::new(-4.0, 3.0));
        assert!(v.dot(p).abs() < TOL);
    }

    #[test]
    fn test_cross() {
        assert!((cross(Vec2::X, Vec2::Y) - 1.0).abs() < TOL);
        assert!((cross(Vec2::Y, Vec2::X) + 1.0).abs() < TOL);
        assert!(cross(Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0)).abs() < TOL);
    }

    #[test]
    fn test_project_on_edge_interior() {
        let p = project_on_edge(Vec2::new(1.0, 5.0), Vec2::ZERO, Vec2::new(4.0, 0.0));
        assert!((p - Vec2::new(1.0, 0.0)).length() < TOL);
    }

    #[test]
    fn test_project_on_edge_clamps() {
        let e0 = Vec2::ZERO;
        let e1 = Vec2::new(2.0, 0.0);
        assert_eq!(project_on_edge(Vec2::new(-3.0, 1.0), e0, e1), e0);
        assert_eq!(project_on_edge(Vec2::new(9.0, -1.0), e0, e1), e1);
    }

    #[test]
    fn test_project_on_degenerate_edge() {
        let e = Vec2::new(1.0, 1.0);
        assert_eq!(project_on_edge(Vec2::new(5.0, 5.0), e, e), e);
    }

    #[test]
    fn test_unit_or() {
        assert!((unit_or(Vec2::new(0.0, 3.0), Vec2::X) - Vec2::Y).length() < TOL);
        assert_eq!(unit_or(Vec2::ZERO, Vec2::X), Vec2::X);
    }

    #[test]
    fn test_min_max3() {
        assert_eq!(min3(3.0, -1.0, 2.0), -1.0);
        assert_eq!(max3(3.0, -1.0, 2.0), 3.0);
    }
}
