//! World-space axis-aligned box, built from a box collider or as the bounds
//! of any other shape.

use glam::Vec2;

/// An axis-aligned box defined by its center and half extents.
///
/// Corner and face indices wrap modulo 4 and follow a fixed winding:
///
/// ```text
///   vertices: 3---0    normals:  --3--
///             |   |             2     0
///             2---1              --1--
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extent: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        Aabb {
            center,
            half_extent: half_extent.abs(),
        }
    }

    /// Creates a box spanning two corner points, in any order.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        let lo = min.min(max);
        let hi = min.max(max);
        Aabb::new((lo + hi) * 0.5, (hi - lo) * 0.5)
    }

    pub fn width(&self) -> f32 {
        2.0 * self.half_extent.x
    }

    pub fn height(&self) -> f32 {
        2.0 * self.half_extent.y
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_extent.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_extent.x
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half_extent.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extent.y
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extent
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extent
    }

    /// Clamps `p` into the box.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }

    /// Closed-interval overlap on the X axis.
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        !(self.right() < other.left() || self.left() > other.right())
    }

    /// Closed-interval overlap on the Y axis.
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        !(self.top() < other.bottom() || self.bottom() > other.top())
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Strict containment; points on the boundary are outside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let d = (p - self.center).abs();
        d.x < self.half_extent.x && d.y < self.half_extent.y
    }

    /// Corner `idx` (modulo 4) in world space.
    pub fn vertex(&self, idx: i32) -> Vec2 {
        let r = self.half_extent;
        match idx.rem_euclid(4) {
            0 => self.center + r,
            1 => self.center + Vec2::new(r.x, -r.y),
            2 => self.center - r,
            _ => self.center + Vec2::new(-r.x, r.y),
        }
    }

    /// Outward face normal `idx` (modulo 4).
    pub fn normal(idx: i32) -> Vec2 {
        match idx.rem_euclid(4) {
            0 => Vec2::X,
            1 => Vec2::NEG_Y,
            2 => Vec2::NEG_X,
            _ => Vec2::Y,
        }
    }

    /// Midpoint of the face running from corner `idx` to corner `idx + 1`.
    pub fn face_midpoint(&self, idx: i32) -> Vec2 {
        0.5 * (self.vertex(idx) + self.vertex(idx + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    fn unit_box() -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::ONE)
    }

    #[test]
    fn test_aabb_extents() {
        let b = Aabb::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert!((b.left() + 2.0).abs() < EPSILON);
        assert!((b.right() - 4.0).abs() < EPSILON);
        assert!((b.bottom() + 2.0).abs() < EPSILON);
        assert!((b.top() - 6.0).abs() < EPSILON);
        assert!((b.width() - 6.0).abs() < EPSILON);
        assert!((b.height() - 8.0).abs() < EPSILON);
    }

    #[test]
    fn test_vertex_winding() {
        let b = Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 1.0));
        assert_eq!(b.vertex(0), Vec2::new(3.0, 2.0));
        assert_eq!(b.vertex(1), Vec2::new(3.0, 0.0));
        assert_eq!(b.vertex(2), Vec2::new(-1.0, 0.0));
        assert_eq!(b.vertex(3), Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn test_vertex_index_wraps() {
        let b = unit_box();
        assert_eq!(b.vertex(4), b.vertex(0));
        assert_eq!(b.vertex(-1), b.vertex(3));
        assert_eq!(b.vertex(7), b.vertex(3));
    }

    #[test]
    fn test_normal_winding() {
        assert_eq!(Aabb::normal(0), Vec2::new(1.0, 0.0));
        assert_eq!(Aabb::normal(1), Vec2::new(0.0, -1.0));
        assert_eq!(Aabb::normal(2), Vec2::new(-1.0, 0.0));
        assert_eq!(Aabb::normal(3), Vec2::new(0.0, 1.0));
        assert_eq!(Aabb::normal(-4), Aabb::normal(0));
    }

    #[test]
    fn test_face_midpoints_match_normals() {
        let b = unit_box();
        for idx in 0..4 {
            let mid = b.face_midpoint(idx);
            assert!((mid - Aabb::normal(idx)).length() < EPSILON, "face {}", idx);
        }
    }

    #[test]
    fn test_clamp() {
        let b = unit_box();
        assert_eq!(b.clamp(Vec2::new(5.0, 0.5)), Vec2::new(1.0, 0.5));
        assert_eq!(b.clamp(Vec2::new(-3.0, -3.0)), Vec2::new(-1.0, -1.0));
        assert_eq!(b.clamp(Vec2::new(0.2, 0.3)), Vec2::new(0.2, 0.3));
    }

    #[test]
    fn test_overlap_axes() {
        let a = unit_box();
        let b = Aabb::new(Vec2::new(1.5, 5.0), Vec2::ONE);
        assert!(a.overlaps_x(&b));
        assert!(!a.overlaps_y(&b));
        assert!(!a.overlaps(&b));

        let touching = Aabb::new(Vec2::new(2.0, 0.0), Vec2::ONE);
        assert!(a.overlaps(&touching));
    }

    #[test]
    fn test_contains_point_strict() {
        let b = unit_box();
        assert!(b.contains_point(Vec2::new(0.5, -0.5)));
        assert!(!b.contains_point(Vec2::new(1.0, 0.0)));
        assert!(!b.contains_point(Vec2::new(3.0, 0.0)));
    }

    #[test]
    fn test_from_min_max_any_order() {
        let b = Aabb::from_min_max(Vec2::new(3.0, 0.0), Vec2::new(-2.0, 5.0));
        assert!((b.left() + 2.0).abs() < EPSILON);
        assert!((b.right() - 3.0).abs() < EPSILON);
        assert!(b.bottom().abs() < EPSILON);
        assert!((b.top() - 5.0).abs() < EPSILON);
    }
}
